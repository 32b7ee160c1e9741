use serde::Serialize;

/// Body of `user/unpw/verify`.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VerifyRequest<'a> {
    pub identifier: &'a str,
    pub password: &'a str,
    /// SECO expects the literal `"Y"`.
    pub upgrade_auth: &'static str,
}

impl<'a> VerifyRequest<'a> {
    pub fn new(identifier: &'a str, password: &'a str) -> Self {
        Self {
            identifier,
            password,
            upgrade_auth: "Y",
        }
    }
}

/// Body of `session/details/get`. Every detail section is requested.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetailsRequest {
    pub include_user_details: bool,
    pub include_profile_details: bool,
    pub include_entitlements: bool,
}

impl Default for SessionDetailsRequest {
    fn default() -> Self {
        Self {
            include_user_details: true,
            include_profile_details: true,
            include_entitlements: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn verify_body_shape() {
        let body = serde_json::to_value(VerifyRequest::new("jane@example.com", "hunter2")).unwrap();
        assert_eq!(
            body,
            json!({
                "identifier": "jane@example.com",
                "password": "hunter2",
                "upgradeAuth": "Y"
            })
        );
    }

    #[test]
    fn session_details_body_requests_everything() {
        let body = serde_json::to_value(SessionDetailsRequest::default()).unwrap();
        assert_eq!(
            body,
            json!({
                "includeUserDetails": true,
                "includeProfileDetails": true,
                "includeEntitlements": true
            })
        );
    }
}
