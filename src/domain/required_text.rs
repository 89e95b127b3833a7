/// A form value that must not be blank.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(transparent)]
pub struct RequiredText(String);

impl RequiredText {
    /// `field` names the input in the error message.
    pub fn parse(s: String, field: &str) -> Result<RequiredText, String> {
        if s.trim().is_empty() {
            Err(format!("{} is required", field))
        } else {
            Ok(Self(s))
        }
    }
}

impl AsRef<str> for RequiredText {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<RequiredText> for String {
    fn from(text: RequiredText) -> Self {
        text.0
    }
}
