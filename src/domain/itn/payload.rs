//! Raw fields of an inbound notification.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Field carrying the sender's signature. Never part of the canonical string.
pub const SIGNATURE_FIELD: &str = "signature";

/// Ordered notification fields, exactly as received.
///
/// Order matters: the canonical parameter string is built in receipt order,
/// so the payload is a list of pairs rather than a map. Immutable once built.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationPayload {
    fields: Vec<(String, String)>,
}

impl NotificationPayload {
    pub fn new(fields: Vec<(String, String)>) -> Self {
        Self { fields }
    }

    /// Parses an `application/x-www-form-urlencoded` body, keeping field order.
    pub fn from_form_body(body: &[u8]) -> Self {
        let fields = url::form_urlencoded::parse(body)
            .map(|(key, value)| (key.into_owned(), value.into_owned()))
            .collect();
        Self { fields }
    }

    /// First value for `key`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields
            .iter()
            .map(|(key, value)| (key.as_str(), value.as_str()))
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn signature(&self) -> Option<&str> {
        self.get(SIGNATURE_FIELD)
    }

    pub fn payment_status(&self) -> Option<&str> {
        self.get("payment_status")
    }

    pub fn amount_gross(&self) -> Option<&str> {
        self.get("amount_gross")
    }

    /// Subscription token, present on recurring-billing notifications.
    pub fn token(&self) -> Option<&str> {
        self.get("token")
    }

    /// Merchant's own payment reference.
    pub fn m_payment_id(&self) -> Option<&str> {
        self.get("m_payment_id")
    }

    /// Gateway's payment reference.
    pub fn pf_payment_id(&self) -> Option<&str> {
        self.get("pf_payment_id")
    }
}

impl<K, V> FromIterator<(K, V)> for NotificationPayload
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            fields: iter
                .into_iter()
                .map(|(key, value)| (key.into(), value.into()))
                .collect(),
        }
    }
}

impl Serialize for NotificationPayload {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_body_keeps_receipt_order() {
        let body = b"m_payment_id=01AB&pf_payment_id=1089250&payment_status=COMPLETE&item_name=Test+Item";
        let payload = NotificationPayload::from_form_body(body);

        let keys: Vec<&str> = payload.iter().map(|(key, _)| key).collect();
        assert_eq!(keys, vec!["m_payment_id", "pf_payment_id", "payment_status", "item_name"]);
        assert_eq!(payload.get("item_name"), Some("Test Item"));
    }

    #[test]
    fn form_body_decodes_percent_escapes() {
        let payload = NotificationPayload::from_form_body(b"email_address=test%40example.com");
        assert_eq!(payload.get("email_address"), Some("test@example.com"));
    }

    #[test]
    fn accessors_read_known_fields() {
        let payload: NotificationPayload = vec![
            ("amount_gross", "200.00"),
            ("payment_status", "COMPLETE"),
            ("token", "dc0521d3-55fe-269b-fa00-b647310d760f"),
            ("signature", "abc"),
        ]
        .into_iter()
        .collect();

        assert_eq!(payload.amount_gross(), Some("200.00"));
        assert_eq!(payload.payment_status(), Some("COMPLETE"));
        assert_eq!(payload.token(), Some("dc0521d3-55fe-269b-fa00-b647310d760f"));
        assert_eq!(payload.signature(), Some("abc"));
        assert_eq!(payload.m_payment_id(), None);
    }

    #[test]
    fn serializes_as_ordered_object() {
        let payload: NotificationPayload =
            vec![("z_last", "1"), ("a_first", "2")].into_iter().collect();

        assert_eq!(
            serde_json::to_string(&payload).unwrap(),
            r#"{"z_last":"1","a_first":"2"}"#
        );
    }

    #[test]
    fn empty_body_yields_empty_payload() {
        let payload = NotificationPayload::from_form_body(b"");
        assert!(payload.is_empty());
        assert_eq!(payload.len(), 0);
    }
}
