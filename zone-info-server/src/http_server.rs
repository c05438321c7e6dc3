// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Dropshot server for serving zone metadata

use crate::zones::{ZoneGroup, ZoneTable};
use dropshot::{HttpError, HttpResponseOk, Path, RequestContext};
use slog::info;
use zone_info_api::{
    CommaSeparatedResponse, ServiceInfoResponse, ZoneInfoApi,
    ZoneNamePathParam,
};

/// Name of the repeated query parameter joined by `array_test`
const STATUS_PARAM: &str = "status";

pub struct Context {
    zones: ZoneTable,
}

impl Context {
    pub fn new(zones: ZoneTable) -> Context {
        Context { zones }
    }
}

pub fn api() -> dropshot::ApiDescription<Context> {
    zone_info_api::zone_info_api_mod::api_description::<ZoneInfoApiImpl>()
        .expect("registered zone info entrypoints")
}

enum ZoneInfoApiImpl {}

impl ZoneInfoApi for ZoneInfoApiImpl {
    type Context = Context;

    async fn service_info_list(
        rqctx: RequestContext<Context>,
    ) -> Result<HttpResponseOk<ServiceInfoResponse>, HttpError> {
        let apictx = rqctx.context();
        Ok(HttpResponseOk(apictx.zones.service_info_all()))
    }

    async fn service_info_get(
        rqctx: RequestContext<Context>,
        path_params: Path<ZoneNamePathParam>,
    ) -> Result<HttpResponseOk<ServiceInfoResponse>, HttpError> {
        let apictx = rqctx.context();
        let zone_name = path_params.into_inner().zone_name;
        let response = match ZoneGroup::from_label(&zone_name) {
            Some(group) => apictx.zones.service_info_for(group),
            None => {
                // Unknown groups get an empty envelope, not a 404.
                info!(
                    rqctx.log,
                    "request for unknown zone group";
                    "zone_name" => &zone_name,
                );
                ServiceInfoResponse::default()
            }
        };
        Ok(HttpResponseOk(response))
    }

    async fn array_test(
        rqctx: RequestContext<Context>,
    ) -> Result<HttpResponseOk<CommaSeparatedResponse>, HttpError> {
        let value = join_query_values(rqctx.request.uri().query(), STATUS_PARAM)
            .map_err(|error| {
                HttpError::for_bad_request(
                    None,
                    format!("unable to parse query string: {error}"),
                )
            })?;
        Ok(HttpResponseOk(CommaSeparatedResponse { value }))
    }
}

/// Joins with commas every value given for `name` in a urlencoded query.
///
/// dropshot's `Query` extractor rejects repeated parameters, so the raw query
/// string is parsed here instead.
fn join_query_values(
    query: Option<&str>,
    name: &str,
) -> Result<String, serde_urlencoded::de::Error> {
    let pairs: Vec<(String, String)> =
        serde_urlencoded::from_str(query.unwrap_or(""))?;
    let values: Vec<String> = pairs
        .into_iter()
        .filter(|(key, _)| key == name)
        .map(|(_, value)| value)
        .collect();
    Ok(values.join(","))
}

#[cfg(test)]
mod test {
    use super::join_query_values;

    #[test]
    fn joins_in_order() {
        assert_eq!(
            join_query_values(Some("status=b&status=a&status=c"), "status")
                .unwrap(),
            "b,a,c"
        );
    }

    #[test]
    fn no_values() {
        assert_eq!(join_query_values(None, "status").unwrap(), "");
        assert_eq!(join_query_values(Some(""), "status").unwrap(), "");
        assert_eq!(join_query_values(Some("other=1"), "status").unwrap(), "");
    }

    #[test]
    fn other_params_are_ignored() {
        assert_eq!(
            join_query_values(Some("status=x&page=2&status=y"), "status")
                .unwrap(),
            "x,y"
        );
    }

    #[test]
    fn values_are_decoded() {
        assert_eq!(
            join_query_values(Some("status=in%20use&status=a%2Cb"), "status")
                .unwrap(),
            "in use,a,b"
        );
        assert_eq!(join_query_values(Some("status="), "status").unwrap(), "");
    }
}
