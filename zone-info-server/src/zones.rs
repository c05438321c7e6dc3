// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! The static table of zone metadata served over HTTP

use std::collections::BTreeMap;
use std::fmt;
use zone_info_api::{ServiceInfoResponse, ServiceInfoWrapper, ZoneRecord};

/// Keys of the zone table
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub enum ZoneKey {
    An,
    Atlas,
    GesProxy,
    GesWaf,
}

impl ZoneKey {
    pub const ALL: [ZoneKey; 4] =
        [ZoneKey::An, ZoneKey::Atlas, ZoneKey::GesProxy, ZoneKey::GesWaf];

    pub fn as_str(&self) -> &'static str {
        match self {
            ZoneKey::An => "AN",
            ZoneKey::Atlas => "ATLAS",
            ZoneKey::GesProxy => "GES_PROXY",
            ZoneKey::GesWaf => "GES_WAF",
        }
    }
}

impl fmt::Display for ZoneKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Groups of zones that can be requested by name
///
/// `Ges` is the only group made of more than one zone.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ZoneGroup {
    Ges,
    An,
    Atlas,
}

impl ZoneGroup {
    /// Matches `label` against the group names, ignoring case.
    pub fn from_label(label: &str) -> Option<ZoneGroup> {
        match label.to_ascii_uppercase().as_str() {
            "GES" => Some(ZoneGroup::Ges),
            "AN" => Some(ZoneGroup::An),
            "ATLAS" => Some(ZoneGroup::Atlas),
            _ => None,
        }
    }
}

/// Fixed mapping from zone name to its metadata
///
/// The table is built once when the server starts and never changes.
#[derive(Clone, Debug)]
pub struct ZoneTable {
    zones: BTreeMap<&'static str, ZoneRecord>,
}

impl ZoneTable {
    pub fn new() -> ZoneTable {
        let zones = [
            (
                ZoneKey::An,
                zone_record(
                    "11111",
                    "wp",
                    "wpenginepowered.com",
                    "1.1.1.1,2.2.2.2",
                ),
            ),
            (
                ZoneKey::Atlas,
                zone_record(
                    "22222",
                    "js.wp",
                    "wpenginepowered.com",
                    "3.3.3.3,4.4.4.4",
                ),
            ),
            (ZoneKey::GesWaf, zone_record("33333", "", "wpewaf.com", "")),
            (ZoneKey::GesProxy, zone_record("44444", "", "wpeproxy.com", "")),
        ]
        .into_iter()
        .map(|(key, record)| (key.as_str(), record))
        .collect();

        ZoneTable { zones }
    }

    /// Returns a copy of the record stored under `name`.
    ///
    /// Names outside the table produce an empty record, not an error.
    pub fn lookup(&self, name: &str) -> ZoneRecord {
        self.zones.get(name).cloned().unwrap_or_default()
    }

    pub fn get(&self, key: ZoneKey) -> ZoneRecord {
        self.lookup(key.as_str())
    }

    pub fn ges(&self) -> ServiceInfoWrapper {
        ServiceInfoWrapper {
            ges_proxy: Some(self.get(ZoneKey::GesProxy)),
            ges_waf: Some(self.get(ZoneKey::GesWaf)),
        }
    }

    /// Returns the envelope holding every zone group.
    pub fn service_info_all(&self) -> ServiceInfoResponse {
        ServiceInfoResponse {
            an: Some(self.get(ZoneKey::An)),
            atlas: Some(self.get(ZoneKey::Atlas)),
            ges: Some(self.ges()),
        }
    }

    /// Returns the envelope with only `group` filled in.
    pub fn service_info_for(&self, group: ZoneGroup) -> ServiceInfoResponse {
        match group {
            ZoneGroup::Ges => ServiceInfoResponse {
                ges: Some(self.ges()),
                ..Default::default()
            },
            ZoneGroup::An => ServiceInfoResponse {
                an: Some(self.get(ZoneKey::An)),
                ..Default::default()
            },
            ZoneGroup::Atlas => ServiceInfoResponse {
                atlas: Some(self.get(ZoneKey::Atlas)),
                ..Default::default()
            },
        }
    }
}

impl Default for ZoneTable {
    fn default() -> Self {
        ZoneTable::new()
    }
}

fn zone_record(
    cf_zone_id: &str,
    cname: &str,
    root_domain: &str,
    ip_addresses: &str,
) -> ZoneRecord {
    ZoneRecord {
        ip_addresses: ip_list(ip_addresses),
        cname: cname.to_string(),
        root_domain: root_domain.to_string(),
        cf_zone_id: cf_zone_id.to_string(),
    }
}

// An empty list is written as "", which must not become `[""]`.
fn ip_list(ips: &str) -> Vec<String> {
    if ips.is_empty() {
        return Vec::new();
    }
    ips.split(',').map(String::from).collect()
}
