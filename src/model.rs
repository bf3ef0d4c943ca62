//! Data contracts shared with the ticket administration service.
//!
//! These types are only (de)serialized; nothing here is persisted.

use serde::{Deserialize, Serialize};

/// Which printed ticket a template produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TicketType {
    Entry,
    Exit,
    Invoice,
    EntryReceipt,
}

/// A stored ticket template.
///
/// `template` holds the control-code stream, usually in escaped text form.
/// The variant payloads are passed through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketTemplate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ticket_template_id: Option<u64>,
    #[serde(default)]
    pub template: String,
    pub ticket_type: TicketType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub invoice: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub entry_receipt: Option<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub printer_id: Option<u64>,
}

impl TicketTemplate {
    pub fn new(ticket_type: TicketType, template: impl Into<String>) -> Self {
        Self {
            ticket_template_id: None,
            template: template.into(),
            ticket_type,
            invoice: None,
            entry_receipt: None,
            company_id: None,
            user_id: None,
            printer_id: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;

    #[test]
    fn test_deserialize_stored_template() {
        let value = json!({
            "ticketTemplateId": 7,
            "template": "\\u001B@{des_placa}\\n",
            "ticketType": "ENTRY_RECEIPT",
            "companyId": 3,
            "printerId": 11,
            "entryReceipt": { "showQr": true }
        });
        let template: TicketTemplate = serde_json::from_value(value).unwrap();
        assert_eq!(template.ticket_template_id, Some(7));
        assert_eq!(template.ticket_type, TicketType::EntryReceipt);
        assert_eq!(template.template, r"\u001B@{des_placa}\n");
        assert_eq!(template.entry_receipt, Some(json!({ "showQr": true })));
        assert_eq!(template.user_id, None);
    }

    #[test]
    fn test_serialize_skips_missing() {
        let template = TicketTemplate::new(TicketType::Exit, "Hi");
        assert_eq!(
            serde_json::to_value(&template).unwrap(),
            json!({ "template": "Hi", "ticketType": "EXIT" })
        );
    }
}
