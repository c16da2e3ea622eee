use crate::step::OrderRule;

/// Regional mnemonics for the same operator-precedence ordering.
///
/// BODMAS, BIRDMAS, and PEMDAS all resolve the same four
/// [`OrderRule`] tiers in the same order; only the labels differ. This is
/// purely a presentation concern layered over the rule tags; the
/// evaluator never consults it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OrderConvention {
    /// Brackets, Orders, Division/Multiplication, Addition/Subtraction.
    #[default]
    Bodmas,
    /// Brackets, Indices/Roots, Division/Multiplication,
    /// Addition/Subtraction.
    Birdmas,
    /// Parentheses, Exponents, Multiplication/Division,
    /// Addition/Subtraction.
    Pemdas,
}

impl OrderConvention {
    /// Returns the label this convention uses for a rule tier.
    ///
    /// # Example
    /// ```
    /// use bodmas::{convention::OrderConvention, step::OrderRule};
    ///
    /// assert_eq!(OrderConvention::Bodmas.rule_label(OrderRule::Grouping), "Brackets");
    /// assert_eq!(OrderConvention::Pemdas.rule_label(OrderRule::Grouping), "Parentheses");
    /// ```
    #[must_use]
    pub const fn rule_label(self, rule: OrderRule) -> &'static str {
        match (self, rule) {
            (Self::Bodmas | Self::Birdmas, OrderRule::Grouping) => "Brackets",
            (Self::Pemdas, OrderRule::Grouping) => "Parentheses",
            (Self::Bodmas, OrderRule::Exponents) => "Orders",
            (Self::Birdmas, OrderRule::Exponents) => "Indices/Roots",
            (Self::Pemdas, OrderRule::Exponents) => "Exponents",
            (Self::Bodmas | Self::Birdmas, OrderRule::MultiplicationDivision) => {
                "Division/Multiplication"
            },
            (Self::Pemdas, OrderRule::MultiplicationDivision) => "Multiplication/Division",
            (_, OrderRule::AdditionSubtraction) => "Addition/Subtraction",
        }
    }
}

impl std::fmt::Display for OrderConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Bodmas => "bodmas",
            Self::Birdmas => "birdmas",
            Self::Pemdas => "pemdas",
        };
        write!(f, "{name}")
    }
}

impl std::str::FromStr for OrderConvention {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "bodmas" => Ok(Self::Bodmas),
            "birdmas" => Ok(Self::Birdmas),
            "pemdas" => Ok(Self::Pemdas),
            other => Err(format!("Unknown convention '{other}'. Expected bodmas, birdmas, or \
                                  pemdas.")),
        }
    }
}

/// Returns the fixed display color associated with a rule tier.
///
/// The palette is shared by every convention so a timeline keeps its
/// coloring when the viewer switches mnemonics.
#[must_use]
pub const fn rule_color(rule: OrderRule) -> &'static str {
    match rule {
        OrderRule::Grouping => "#5e81ac",
        OrderRule::Exponents => "#bf616a",
        OrderRule::MultiplicationDivision => "#ebcb8b",
        OrderRule::AdditionSubtraction => "#a3be8c",
    }
}
