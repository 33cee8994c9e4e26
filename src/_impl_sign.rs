use crate::Sign;
use std::convert::TryFrom;
use std::fmt::{Display, Error, Formatter};

impl Sign {
    /// The one-character token used for this sign in BEELINE files.
    pub fn as_token(&self) -> &'static str {
        match self {
            Sign::Activation => "+",
            Sign::Repression => "-",
        }
    }

    pub fn is_activation(&self) -> bool {
        *self == Sign::Activation
    }

    pub fn is_repression(&self) -> bool {
        *self == Sign::Repression
    }
}

impl Display for Sign {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        write!(f, "{}", self.as_token())
    }
}

impl TryFrom<&str> for Sign {
    type Error = String;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim() {
            "+" => Ok(Sign::Activation),
            "-" => Ok(Sign::Repression),
            _ => Err(format!("String \"{}\" is not a valid edge sign.", value)),
        }
    }
}
