use crate::domain::validation::ValidationError;

use phonenumber::country;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// TextMagic account username (`X-TM-Username`).
///
/// Must not be blank. Kept exactly as given, surrounding whitespace included.
pub struct Username(String);

impl Username {
    /// Header carrying the username on every request.
    pub const HEADER: &'static str = "X-TM-Username";

    /// Create a validated [`Username`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: "username" });
        }
        Ok(Self(value))
    }

    /// Borrow the validated username.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, PartialEq, Eq, Hash)]
/// TextMagic API key (`X-TM-Key`).
///
/// Must not be blank. Kept exactly as given. `Debug` output is redacted.
pub struct ApiKey(String);

impl ApiKey {
    /// Header carrying the API key on every request.
    pub const HEADER: &'static str = "X-TM-Key";

    /// Create a validated [`ApiKey`].
    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        if value.trim().is_empty() {
            return Err(ValidationError::Empty { field: "api_key" });
        }
        Ok(Self(value))
    }

    /// Borrow the validated key.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Username / API key pair sent with every request.
pub struct Credentials {
    username: Username,
    api_key: ApiKey,
}

impl Credentials {
    /// Validate both parts and pair them up.
    pub fn new(
        username: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        Ok(Self {
            username: Username::new(username)?,
            api_key: ApiKey::new(api_key)?,
        })
    }

    pub fn username(&self) -> &Username {
        &self.username
    }

    pub fn api_key(&self) -> &ApiKey {
        &self.api_key
    }

    pub(crate) fn headers(&self) -> [(&'static str, String); 2] {
        [
            (Username::HEADER, self.username.as_str().to_owned()),
            (ApiKey::HEADER, self.api_key.as_str().to_owned()),
        ]
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
/// Phone number exactly as it will appear in a request (`phone` parameter or `chats/{phone}`).
///
/// Only trimmed, never reformatted. Build one from a [`PhoneNumber`] to get TextMagic's
/// canonical form.
pub struct RawPhoneNumber(String);

impl RawPhoneNumber {
    pub const FIELD: &'static str = "phone";

    pub fn new(value: impl Into<String>) -> Result<Self, ValidationError> {
        let value = value.into();
        match value.trim() {
            "" => Err(ValidationError::Empty { field: Self::FIELD }),
            phone => Ok(Self(phone.to_owned())),
        }
    }

    pub fn raw(&self) -> &str {
        &self.0
    }
}

impl From<PhoneNumber> for RawPhoneNumber {
    fn from(value: PhoneNumber) -> Self {
        Self(value.international_digits().to_owned())
    }
}

impl std::fmt::Display for RawPhoneNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Clone)]
/// A phone number validated with libphonenumber rules.
///
/// TextMagic stores numbers in international format without the leading `+`
/// (`447860021130`); [`PhoneNumber::international_digits`] yields that form. Two numbers are
/// equal when they normalize to the same E.164 value, whatever their input spelling.
pub struct PhoneNumber {
    input: String,
    e164: String,
    parsed: phonenumber::PhoneNumber,
}

impl PhoneNumber {
    /// Parse `input`, using `default_region` for national-format numbers such as
    /// `07860 021130`.
    pub fn parse(
        default_region: Option<country::Id>,
        input: impl Into<String>,
    ) -> Result<Self, ValidationError> {
        let input: String = input.into();
        let input = input.trim().to_owned();
        if input.is_empty() {
            return Err(ValidationError::Empty {
                field: RawPhoneNumber::FIELD,
            });
        }

        let parsed = match phonenumber::parse(default_region, &input) {
            Ok(parsed) if phonenumber::is_valid(&parsed) => parsed,
            _ => return Err(ValidationError::InvalidPhoneNumber { input }),
        };
        let e164 = parsed.format().mode(phonenumber::Mode::E164).to_string();

        Ok(Self {
            input,
            e164,
            parsed,
        })
    }

    /// The trimmed input as given to [`PhoneNumber::parse`].
    pub fn raw(&self) -> &str {
        &self.input
    }

    /// `+447860021130`
    pub fn e164(&self) -> &str {
        &self.e164
    }

    /// `447860021130`, the form TextMagic uses in requests and responses.
    pub fn international_digits(&self) -> &str {
        self.e164.trim_start_matches('+')
    }

    pub fn country(&self) -> Option<country::Id> {
        self.parsed.country().id()
    }
}

impl PartialEq for PhoneNumber {
    fn eq(&self, other: &Self) -> bool {
        self.e164 == other.e164
    }
}

impl Eq for PhoneNumber {}
