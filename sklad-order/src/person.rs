use sklad_shared::Masked;
use std::fmt;

/// Identity record shared by everyone the warehouse deals with
#[derive(Debug, Clone)]
pub struct Person {
    name: String,
    surname: String,
    phone_number: Masked<String>,
    email: Masked<String>,
}

impl Person {
    pub fn new(
        name: impl Into<String>,
        surname: impl Into<String>,
        phone_number: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            surname: surname.into(),
            phone_number: Masked::new(phone_number.into()),
            email: Masked::new(email.into()),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn surname(&self) -> &str {
        &self.surname
    }

    pub fn email(&self) -> &str {
        self.email.expose()
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Name: {} {}, Phone: {}, Email: {}",
            self.name,
            self.surname,
            self.phone_number.expose(),
            self.email.expose()
        )
    }
}
