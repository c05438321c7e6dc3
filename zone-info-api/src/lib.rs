// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! HTTP API for the zone info service
//!
//! The service hands out a small amount of static, DNS-facing metadata about
//! the zones fronting our hosting platform: the zone id, the CNAME clients
//! should point at, the root domain, and any fixed IP addresses.  Zones are
//! organized into three groups (`AN`, `ATLAS`, and `GES`), and the `GES` group
//! is itself split into a proxy zone and a WAF zone.

use dropshot::{HttpError, HttpResponseOk, Path, RequestContext};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

#[dropshot::api_description]
pub trait ZoneInfoApi {
    type Context;

    /// Fetch metadata for every zone group.
    #[endpoint {
        method = GET,
        path = "/service_info",
    }]
    async fn service_info_list(
        rqctx: RequestContext<Self::Context>,
    ) -> Result<HttpResponseOk<ServiceInfoResponse>, HttpError>;

    /// Fetch metadata for a single zone group.
    ///
    /// The group name is matched case-insensitively against `GES`, `AN`, and
    /// `ATLAS`.  Any other name produces an empty object rather than an error.
    #[endpoint {
        method = GET,
        path = "/service_info/{zone_name}",
    }]
    async fn service_info_get(
        rqctx: RequestContext<Self::Context>,
        path_params: Path<ZoneNamePathParam>,
    ) -> Result<HttpResponseOk<ServiceInfoResponse>, HttpError>;

    /// Join every `status` query parameter with commas.
    ///
    /// `status` may be given any number of times
    /// (`/array_test?status=a&status=b`).  The values are joined in the order
    /// they appear; if there are none, `Value` is the empty string.
    #[endpoint {
        method = GET,
        path = "/array_test",
    }]
    async fn array_test(
        rqctx: RequestContext<Self::Context>,
    ) -> Result<HttpResponseOk<CommaSeparatedResponse>, HttpError>;
}

#[derive(Clone, Debug, Deserialize, JsonSchema, Serialize)]
pub struct ZoneNamePathParam {
    /// Name of the zone group (`GES`, `AN` or `ATLAS`, any case)
    pub zone_name: String,
}

/// DNS-facing metadata for one zone
///
/// Empty fields are left out of the serialized form entirely.
#[derive(
    Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize,
)]
pub struct ZoneRecord {
    /// Fixed IP addresses for the zone, if it has any
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub ip_addresses: Vec<String>,
    /// CNAME target under the root domain
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cname: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub root_domain: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub cf_zone_id: String,
}

impl ZoneRecord {
    /// Returns true if every field of this record is empty.
    pub fn is_empty(&self) -> bool {
        self.ip_addresses.is_empty()
            && self.cname.is_empty()
            && self.root_domain.is_empty()
            && self.cf_zone_id.is_empty()
    }
}

/// Zone metadata, grouped by zone group
///
/// Groups that weren't requested are omitted.
#[derive(
    Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize,
)]
pub struct ServiceInfoResponse {
    #[serde(rename = "AN", default, skip_serializing_if = "Option::is_none")]
    pub an: Option<ZoneRecord>,
    #[serde(rename = "ATLAS", default, skip_serializing_if = "Option::is_none")]
    pub atlas: Option<ZoneRecord>,
    #[serde(rename = "GES", default, skip_serializing_if = "Option::is_none")]
    pub ges: Option<ServiceInfoWrapper>,
}

/// The two zones making up the `GES` group
#[derive(
    Clone, Debug, Default, Deserialize, Eq, JsonSchema, PartialEq, Serialize,
)]
pub struct ServiceInfoWrapper {
    #[serde(
        rename = "GES_PROXY",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ges_proxy: Option<ZoneRecord>,
    #[serde(
        rename = "GES_WAF",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub ges_waf: Option<ZoneRecord>,
}

#[derive(Clone, Debug, Deserialize, Eq, JsonSchema, PartialEq, Serialize)]
pub struct CommaSeparatedResponse {
    #[serde(rename = "Value")]
    pub value: String,
}

#[cfg(test)]
mod test {
    use super::*;
    use serde_json::json;

    #[test]
    fn empty_fields_are_omitted() {
        let record = ZoneRecord {
            ip_addresses: Vec::new(),
            cname: String::new(),
            root_domain: "wpewaf.com".to_string(),
            cf_zone_id: "33333".to_string(),
        };
        assert_eq!(
            serde_json::to_value(&record).unwrap(),
            json!({ "root_domain": "wpewaf.com", "cf_zone_id": "33333" })
        );

        let response = ServiceInfoResponse::default();
        assert_eq!(serde_json::to_string(&response).unwrap(), "{}");
    }

    #[test]
    fn group_slots_use_upper_case_names() {
        let response = ServiceInfoResponse {
            an: Some(ZoneRecord {
                cf_zone_id: "1".to_string(),
                ..Default::default()
            }),
            atlas: None,
            ges: Some(ServiceInfoWrapper {
                ges_proxy: Some(ZoneRecord::default()),
                ges_waf: None,
            }),
        };
        assert_eq!(
            serde_json::to_value(&response).unwrap(),
            json!({
                "AN": { "cf_zone_id": "1" },
                "GES": { "GES_PROXY": {} },
            })
        );
    }

    #[test]
    fn comma_separated_value_is_capitalized() {
        let response = CommaSeparatedResponse { value: String::new() };
        assert_eq!(
            serde_json::to_string(&response).unwrap(),
            r#"{"Value":""}"#
        );
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let record: ZoneRecord = serde_json::from_str("{}").unwrap();
        assert!(record.is_empty());
    }
}
