// ============================================================================
// Basic Usage Example
// ============================================================================

use decimal_engine::prelude::*;
use std::sync::Arc;

fn main() {
    #[cfg(feature = "logging")]
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    println!("=== Decimal Engine Example ===\n");

    let mut ctx = ContextBuilder::new()
        .named("demo")
        .build(Arc::new(LoggingEventHandler))
        .unwrap();

    println!("Fresh context scale: {}\n", ctx.get_scale());

    // Scale follows the operands for add/sub
    println!("=== Addition and Subtraction ===");
    println!("1.25 + 2       = {}", ctx.add("1.25", "2", None).unwrap());
    println!("1.25 - 2.500   = {}", ctx.sub("1.25", "2.500", None).unwrap());
    println!("0.1 + 0.2 @ 5  = {}", ctx.add("0.1", "0.2", Some(5)).unwrap());

    // Everything else truncates to the ambient or requested scale
    println!("\n=== Truncation ===");
    println!("1.99 * 1.99 @ 1 = {}", ctx.mul("1.99", "1.99", Some(1)).unwrap());
    println!("1 / 3 @ 5       = {}", ctx.div("1", "3", Some(5)).unwrap());
    println!("sqrt(2) @ 30    = {}", ctx.sqrt("2", Some(30)).unwrap());

    println!("\n=== Ambient Scale ===");
    let previous = ctx.replace_scale(10);
    println!("Scale {} -> {}", previous, ctx.get_scale());
    println!("22 / 7          = {}", ctx.div("22", "7", None).unwrap());
    println!("1.5 ^ 3         = {}", ctx.pow("1.5", "3", None).unwrap());
    println!("10 mod 3.3      = {}", ctx.modulo("10", "3.3", None).unwrap());

    let (quotient, remainder) = ctx.div_rem("-17", "5", None).unwrap();
    println!("-17 divmod 5    = ({}, {})", quotient, remainder);

    println!("\n=== Integer Work ===");
    ctx.set_scale(0);
    println!("2 ^ 128         = {}", ctx.pow("2", "128", None).unwrap());
    println!(
        "3 ^ 12345678901234567890 mod 98765432109876543210 = {}",
        ctx.powmod("3", "12345678901234567890", "98765432109876543210", None)
            .unwrap()
    );

    println!("\n=== Comparison ===");
    println!("compare(1.50, 1.5)        = {}", ctx.compare("1.50", "1.5", None).unwrap());
    println!("compare(1.239, 1.231) @ 2 = {}", ctx.compare("1.239", "1.231", Some(2)).unwrap());

    println!("\n=== Errors ===");
    for (label, outcome) in [
        ("10 / 0", ctx.div("10", "0", None)),
        ("2 ^ -1", ctx.pow("2", "-1", None)),
        ("2 ^ 0.5", ctx.pow("2", "0.5", None)),
        ("sqrt(-1)", ctx.sqrt("-1", None)),
        ("1e5 + 1", ctx.add("1e5", "1", None)),
    ] {
        match outcome {
            Ok(value) => println!("{:<10} = {}", label, value),
            Err(error) => println!("{:<10} -> {}", label, error),
        }
    }

    // A context shared by worker threads of one logical execution
    println!("\n=== Shared Context ===");
    let shared = SharedContext::new(ctx);
    shared.set_scale(4);
    let handles: Vec<_> = (1..=3)
        .map(|n| {
            let shared = shared.clone();
            std::thread::spawn(move || shared.with(|c| c.div("1", &n.to_string(), None)))
        })
        .collect();

    for handle in handles {
        match handle.join() {
            Ok(Ok(value)) => println!("  {}", value),
            Ok(Err(error)) => println!("  error: {}", error),
            Err(_) => println!("  worker panicked"),
        }
    }
}
