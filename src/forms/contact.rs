use lazy_static::lazy_static;
use regex::Regex;
use serde::Deserialize;

lazy_static! {
    static ref EMAIL_RE: Regex =
        Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("invalid email regex");
}

/// Raw write payload, exactly as the form posts it. Every field is optional
/// text; the per-operation constructors below do the trimming and the
/// required-field checks.
#[derive(Debug, Deserialize)]
pub struct ContactPayload {
    pub action: Option<String>,
    pub id: Option<String>,
    #[serde(rename = "firstName")]
    pub first_name: Option<String>,
    #[serde(rename = "lastName")]
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Action {
    Create,
    Update,
    Delete,
    Unknown,
}

/// Validated input for the create operation.
#[derive(Debug)]
pub struct NewContact {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

/// Validated input for the update operation.
#[derive(Debug)]
pub struct UpdateContact {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
}

fn trimmed(value: &Option<String>) -> String {
    value.as_deref().unwrap_or_default().trim().to_string()
}

// blank phone becomes NULL in the store
fn optional_phone(value: &Option<String>) -> Option<String> {
    let phone = trimmed(value);
    if phone.is_empty() {
        None
    } else {
        Some(phone)
    }
}

fn parse_id(value: &Option<String>) -> Option<i32> {
    value
        .as_deref()
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .and_then(|id| id.parse::<i32>().ok())
        .filter(|id| *id > 0)
}

impl ContactPayload {
    /// The write discriminator. A missing `action` means create.
    pub fn action(&self) -> Action {
        match self.action.as_deref() {
            None | Some("create") => Action::Create,
            Some("update") => Action::Update,
            Some("delete") => Action::Delete,
            Some(_) => Action::Unknown,
        }
    }

    pub fn new_contact(&self) -> Result<NewContact, String> {
        let first_name = trimmed(&self.first_name);
        let last_name = trimmed(&self.last_name);
        let email = trimmed(&self.email);

        if first_name.is_empty() || last_name.is_empty() || email.is_empty() {
            return Err("First name, last name, and email are required".to_string());
        }

        if !EMAIL_RE.is_match(&email) {
            return Err("Invalid email format".to_string());
        }

        Ok(NewContact {
            first_name,
            last_name,
            email,
            phone: optional_phone(&self.phone),
        })
    }

    pub fn update_contact(&self) -> Result<UpdateContact, String> {
        let id = parse_id(&self.id);
        let first_name = trimmed(&self.first_name);
        let last_name = trimmed(&self.last_name);
        let email = trimmed(&self.email);

        let Some(id) = id else {
            return Err("ID, first name, last name, and email are required".to_string());
        };
        if first_name.is_empty() || last_name.is_empty() || email.is_empty() {
            return Err("ID, first name, last name, and email are required".to_string());
        }

        if !EMAIL_RE.is_match(&email) {
            return Err("Invalid email format".to_string());
        }

        Ok(UpdateContact {
            id,
            first_name,
            last_name,
            email,
            phone: optional_phone(&self.phone),
        })
    }

    pub fn contact_id(&self) -> Result<i32, String> {
        parse_id(&self.id).ok_or_else(|| "ID is required".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(
        action: Option<&str>,
        id: Option<&str>,
        first: Option<&str>,
        last: Option<&str>,
        email: Option<&str>,
        phone: Option<&str>,
    ) -> ContactPayload {
        ContactPayload {
            action: action.map(String::from),
            id: id.map(String::from),
            first_name: first.map(String::from),
            last_name: last.map(String::from),
            email: email.map(String::from),
            phone: phone.map(String::from),
        }
    }

    #[test]
    fn missing_action_is_create() {
        let form = payload(None, None, None, None, None, None);
        assert_eq!(form.action(), Action::Create);
    }

    #[test]
    fn unknown_action_is_rejected() {
        let form = payload(Some("upsert"), None, None, None, None, None);
        assert_eq!(form.action(), Action::Unknown);
    }

    #[test]
    fn create_trims_fields_and_blanks_phone() {
        let form = payload(
            Some("create"),
            None,
            Some("  Ada "),
            Some(" Lovelace"),
            Some(" ada@example.com "),
            Some("   "),
        );
        let contact = form.new_contact().unwrap();
        assert_eq!(contact.first_name, "Ada");
        assert_eq!(contact.last_name, "Lovelace");
        assert_eq!(contact.email, "ada@example.com");
        assert_eq!(contact.phone, None);
    }

    #[test]
    fn create_rejects_whitespace_only_required_field() {
        let form = payload(
            Some("create"),
            None,
            Some("   "),
            Some("Lovelace"),
            Some("ada@example.com"),
            None,
        );
        let err = form.new_contact().unwrap_err();
        assert_eq!(err, "First name, last name, and email are required");
    }

    #[test]
    fn create_rejects_malformed_email() {
        for email in ["not-an-email", "a@b", "a b@example.com", "@example.com"] {
            let form = payload(
                Some("create"),
                None,
                Some("Ada"),
                Some("Lovelace"),
                Some(email),
                None,
            );
            assert_eq!(form.new_contact().unwrap_err(), "Invalid email format");
        }
    }

    #[test]
    fn update_requires_id() {
        let form = payload(
            Some("update"),
            None,
            Some("Ada"),
            Some("Lovelace"),
            Some("ada@example.com"),
            None,
        );
        assert_eq!(
            form.update_contact().unwrap_err(),
            "ID, first name, last name, and email are required"
        );
    }

    #[test]
    fn update_accepts_valid_payload() {
        let form = payload(
            Some("update"),
            Some("7"),
            Some("Ada"),
            Some("Lovelace"),
            Some("ada@example.com"),
            Some("555-0100"),
        );
        let contact = form.update_contact().unwrap();
        assert_eq!(contact.id, 7);
        assert_eq!(contact.phone.as_deref(), Some("555-0100"));
    }

    #[test]
    fn delete_rejects_blank_or_non_numeric_id() {
        for id in [None, Some(""), Some("  "), Some("abc"), Some("0")] {
            let form = payload(Some("delete"), id, None, None, None, None);
            assert_eq!(form.contact_id().unwrap_err(), "ID is required");
        }
    }
}
