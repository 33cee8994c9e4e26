use crate::{Sign, SignedEdge};
use std::fmt::{Display, Error, Formatter};

impl SignedEdge {
    pub fn new(source: &str, target: &str, sign: Sign) -> SignedEdge {
        SignedEdge {
            source: source.to_string(),
            target: target.to_string(),
            sign,
        }
    }

    pub fn activation(source: &str, target: &str) -> SignedEdge {
        SignedEdge::new(source, target, Sign::Activation)
    }

    pub fn repression(source: &str, target: &str) -> SignedEdge {
        SignedEdge::new(source, target, Sign::Repression)
    }

    pub fn get_source(&self) -> &str {
        self.source.as_str()
    }

    pub fn get_target(&self) -> &str {
        self.target.as_str()
    }

    pub fn get_sign(&self) -> Sign {
        self.sign
    }
}

/// Edges are displayed as `source -> target` for activation and `source -| target`
/// for repression.
impl Display for SignedEdge {
    fn fmt(&self, f: &mut Formatter) -> Result<(), Error> {
        let arrow = match self.sign {
            Sign::Activation => "->",
            Sign::Repression => "-|",
        };
        write!(f, "{} {} {}", self.source, arrow, self.target)
    }
}

#[cfg(test)]
mod tests {
    use crate::{Sign, SignedEdge};

    #[test]
    fn edge_accessors_and_display() {
        let edge = SignedEdge::repression("G1", "G2");
        assert_eq!("G1", edge.get_source());
        assert_eq!("G2", edge.get_target());
        assert_eq!(Sign::Repression, edge.get_sign());
        assert_eq!("G1 -| G2", edge.to_string());
        assert_eq!("G2 -> G2", SignedEdge::activation("G2", "G2").to_string());
    }
}
