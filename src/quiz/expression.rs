use crate::quiz::generator::Difficulty;

/// Operators allowed inside parenthesized pairs.
const PAIR_OPERATORS: &[char] = &['+', '-', '*', '/'];
/// Operators used to join segments; division is excluded so a joined
/// segment can never become a zero denominator.
const CONNECTORS: &[char] = &['+', '-', '*'];

/// Builds one candidate expression for the given difficulty tier.
///
/// The returned text is plain expression syntax; whether it evaluates to
/// a whole number is checked by the generator, not here.
pub(super) fn build_expression(difficulty: Difficulty, rng: &mut impl FnMut() -> f64) -> String {
    match difficulty {
        Difficulty::Easy => build_easy(rng),
        Difficulty::Medium => build_medium(rng),
        Difficulty::Hard => build_hard(rng),
        Difficulty::Insane => build_insane(rng),
    }
}

/// Three small operands joined by `+ - *`, no grouping.
fn build_easy(rng: &mut impl FnMut() -> f64) -> String {
    let a = random_int(2, 15, rng);
    let b = random_int(2, 15, rng);
    let c = random_int(2, 15, rng);
    let op1 = pick(CONNECTORS, rng);
    let op2 = pick(CONNECTORS, rng);

    format!("{a} {op1} {b} {op2} {c}")
}

/// Two parenthesized pairs joined by a connector.
fn build_medium(rng: &mut impl FnMut() -> f64) -> String {
    let group_a = build_pair(2, 15, rng);
    let group_b = build_pair(2, 15, rng);

    format!("{group_a} {} {group_b}", pick(CONNECTORS, rng))
}

/// A parenthesized pair raised to a small exponent, plus a trailing pair.
fn build_hard(rng: &mut impl FnMut() -> f64) -> String {
    let base = build_pair(2, 12, rng);
    let exponent = random_int(2, 3, rng);
    let trailing = build_pair(2, 12, rng);

    format!("{base} ^ {exponent} {} {trailing}", pick(CONNECTORS, rng))
}

/// Two exponent segments and a mixed multiplicative group, all joined by
/// connectors.
fn build_insane(rng: &mut impl FnMut() -> f64) -> String {
    let left = build_power_segment(rng);
    let right = build_power_segment(rng);
    let mixed = build_mixed_group(rng);
    let join_a = pick(CONNECTORS, rng);
    let join_b = pick(CONNECTORS, rng);

    format!("{left} {join_a} {right} {join_b} {mixed}")
}

/// `(pair ^ exponent connector pair)`, parenthesized as a whole.
fn build_power_segment(rng: &mut impl FnMut() -> f64) -> String {
    let base = build_pair(2, 12, rng);
    let exponent = random_int(2, 3, rng);
    let adjuster = build_pair(2, 12, rng);

    format!("({base} ^ {exponent} {} {adjuster})", pick(CONNECTORS, rng))
}

/// Two pairs joined by `*` or `/`, parenthesized as a whole.
fn build_mixed_group(rng: &mut impl FnMut() -> f64) -> String {
    let first = build_pair(3, 15, rng);
    let second = build_pair(3, 15, rng);

    format!("({first} {} {second})", pick(&['*', '/'], rng))
}

/// One parenthesized binary operation over the given operand range.
fn build_pair(min: i64, max: i64, rng: &mut impl FnMut() -> f64) -> String {
    let a = random_int(min, max, rng);
    let b = random_int(min, max, rng);

    format!("({a} {} {b})", pick(PAIR_OPERATORS, rng))
}

/// Draws a uniformly distributed integer in `min..=max` from the injected
/// source.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
pub(super) fn random_int(min: i64, max: i64, rng: &mut impl FnMut() -> f64) -> i64 {
    let span = (max - min + 1) as f64;
    let offset = ((rng)() * span).floor() as i64;

    min + offset.clamp(0, max - min)
}

/// Picks one element from a non-empty slice using the injected source.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub(super) fn pick<T: Copy>(values: &[T], rng: &mut impl FnMut() -> f64) -> T {
    let index = ((rng)() * values.len() as f64).floor() as usize;

    values[index.min(values.len() - 1)]
}

/// Shuffles a slice in place with a Fisher-Yates pass driven by the
/// injected source.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss, clippy::cast_sign_loss)]
pub(super) fn shuffle<T>(values: &mut [T], rng: &mut impl FnMut() -> f64) {
    for i in (1..values.len()).rev() {
        let j = ((rng)() * (i as f64 + 1.0)).floor() as usize;
        values.swap(i, j.min(i));
    }
}
