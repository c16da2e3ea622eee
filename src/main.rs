use std::time::{SystemTime, UNIX_EPOCH};

use bodmas::{
    convention::OrderConvention,
    evaluate,
    quiz::{Difficulty, QuizQuestion, generate_question},
    step::Step,
};
use clap::Parser;

/// bodmas evaluates arithmetic expressions one precedence rule at a time,
/// printing every reduction it performs as a nested timeline.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Generate a practice question (easy, medium, hard, or insane)
    /// instead of evaluating an expression.
    #[arg(short, long)]
    quiz: Option<String>,

    /// Mnemonic used for rule labels: bodmas, birdmas, or pemdas.
    #[arg(short, long, default_value = "bodmas")]
    convention: String,

    /// The expression to evaluate, e.g. "12 / (2 + 1) + 3".
    expression: Option<String>,
}

fn main() {
    let args = Args::parse();

    let convention: OrderConvention = args.convention.parse().unwrap_or_else(|e: String| {
                                                                 eprintln!("{e}");
                                                                 std::process::exit(1);
                                                             });

    if let Some(tier) = args.quiz {
        let difficulty: Difficulty = tier.parse().unwrap_or_else(|e: String| {
                                                     eprintln!("{e}");
                                                     std::process::exit(1);
                                                 });

        let mut rng = clock_rng();
        match generate_question(difficulty, &mut rng) {
            Ok(question) => print_question(&question, convention),
            Err(e) => {
                eprintln!("{e}");
                std::process::exit(1);
            },
        }
        return;
    }

    let Some(expression) = args.expression else {
        eprintln!("Provide an expression to evaluate, or use --quiz <difficulty>.");
        std::process::exit(1);
    };

    match evaluate(&expression) {
        Ok(result) => {
            println!("{} = {}", expression.trim(), result.value);
            for step in &result.steps {
                print_step(step, convention, 1);
            }
        },
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        },
    }
}

/// Prints one step and, indented below it, the interior trace it owns.
fn print_step(step: &Step, convention: OrderConvention, indent: usize) {
    let pad = "  ".repeat(indent);

    println!("{pad}[{}] {}  =>  {}",
             convention.rule_label(step.rule),
             step.operation,
             step.result);
    println!("{pad}  {}", step.description);
    println!("{pad}  {}   ->   {}", step.before, step.after);

    for child in &step.children {
        print_step(child, convention, indent + 1);
    }
}

fn print_question(question: &QuizQuestion, convention: OrderConvention) {
    println!("[{}] What is the value of:", question.difficulty);
    println!("    {}", question.expression);
    println!();

    for (index, option) in question.options.iter().enumerate() {
        println!("  {}. {option}", index + 1);
    }

    println!();
    println!("Answer: {}", question.answer);
    println!("Worked solution:");
    for step in &question.steps {
        print_step(step, convention, 1);
    }
}

/// A small xorshift generator seeded from the system clock, yielding
/// values in `[0, 1)`. Good enough for picking quiz operands; tests
/// inject their own deterministic source instead.
#[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
fn clock_rng() -> impl FnMut() -> f64 {
    let mut state = SystemTime::now().duration_since(UNIX_EPOCH)
                                     .map_or(0x9e37_79b9_7f4a_7c15, |d| d.as_nanos() as u64)
                    | 1;

    move || {
        state ^= state << 13;
        state ^= state >> 7;
        state ^= state << 17;
        (state >> 11) as f64 / (1_u64 << 53) as f64
    }
}
