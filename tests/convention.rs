use bodmas::{
    convention::{OrderConvention, rule_color},
    step::OrderRule,
};

const ALL_RULES: [OrderRule; 4] = [OrderRule::Grouping,
                                   OrderRule::Exponents,
                                   OrderRule::MultiplicationDivision,
                                   OrderRule::AdditionSubtraction];

#[test]
fn labels_follow_the_mnemonic() {
    assert_eq!(OrderConvention::Bodmas.rule_label(OrderRule::Grouping), "Brackets");
    assert_eq!(OrderConvention::Bodmas.rule_label(OrderRule::Exponents), "Orders");
    assert_eq!(OrderConvention::Birdmas.rule_label(OrderRule::Exponents), "Indices/Roots");
    assert_eq!(OrderConvention::Pemdas.rule_label(OrderRule::Grouping), "Parentheses");
    assert_eq!(OrderConvention::Pemdas.rule_label(OrderRule::MultiplicationDivision),
               "Multiplication/Division");

    for convention in [OrderConvention::Bodmas, OrderConvention::Birdmas, OrderConvention::Pemdas]
    {
        assert_eq!(convention.rule_label(OrderRule::AdditionSubtraction),
                   "Addition/Subtraction");
    }
}

#[test]
fn colors_are_fixed_per_rule() {
    // The palette is shared across conventions, so it only keys on the
    // rule.
    for rule in ALL_RULES {
        assert!(rule_color(rule).starts_with('#'));
        assert_eq!(rule_color(rule).len(), 7);
    }

    assert_eq!(rule_color(OrderRule::Grouping), "#5e81ac");
}

#[test]
fn names_parse_case_insensitively() {
    assert_eq!("BODMAS".parse::<OrderConvention>(), Ok(OrderConvention::Bodmas));
    assert_eq!("pemdas".parse::<OrderConvention>(), Ok(OrderConvention::Pemdas));
    assert_eq!("Birdmas".parse::<OrderConvention>(), Ok(OrderConvention::Birdmas));
    assert!("bedmas".parse::<OrderConvention>().is_err());

    assert_eq!(OrderConvention::default(), OrderConvention::Bodmas);
    assert_eq!(OrderConvention::Pemdas.to_string(), "pemdas");
}
