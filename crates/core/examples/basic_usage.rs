//! Basic usage example of the redraft library

use redraft_core::{compute_diff, render, side_by_side, DiffAlgorithmKind, DiffConfig};

const LINE: &str = "----------------------------------------";

fn main() {
    println!("=== Redraft Examples ===\n");

    // Example 1: Simple diff with default configuration
    example_simple_diff();

    // Example 2: Terminal rendering
    example_terminal_rendering();

    // Example 3: Side-by-side view
    example_side_by_side();

    // Example 4: Algorithm selection
    example_algorithm_selection();
}

fn example_simple_diff() {
    println!("Example 1: Simple Diff");
    println!("{}", LINE);

    let original = "I has went to the store yesterday.";
    let revised = "I went to the store yesterday.";

    let result = compute_diff(original, revised, None);

    println!("Original: {}", original);
    println!("Revised:  {}", revised);
    println!("\n{}", result.summary());
    println!("\nSpans:");
    for (i, span) in result.spans.iter().enumerate() {
        println!("  {}. {}", i + 1, span.description());
    }
    println!("\n");
}

fn example_terminal_rendering() {
    println!("Example 2: Terminal Rendering");
    println!("{}", LINE);

    let original = "The quick brown fox jumps over the lazy dog.";
    let revised = "The fast brown fox leaps over the sleepy dog.";

    let result = compute_diff(original, revised, None);
    let rendered = render(&result);

    println!("{}", rendered.to_ansi());
    println!("\nAs HTML: {}", rendered.to_html());
    println!("\n");
}

fn example_side_by_side() {
    println!("Example 3: Side-by-Side View");
    println!("{}", LINE);

    let original = "This are a draft with some error.";
    let revised = "This is a draft without errors.";

    let result = compute_diff(original, revised, None);
    let (left, right) = side_by_side(&result);

    println!("Original side: {}", left.to_ansi());
    println!("Revised side:  {}", right.to_ansi());

    // Each stream stays lossless for its own side
    assert_eq!(left.original_text(), original);
    assert_eq!(right.revised_text(), revised);
    println!("\n");
}

fn example_algorithm_selection() {
    println!("Example 4: Algorithm Selection");
    println!("{}", LINE);

    let original = "one two three four five";
    let revised = "one three five six";

    for algorithm in [DiffAlgorithmKind::Myers, DiffAlgorithmKind::Lcs] {
        let config = DiffConfig::default().with_algorithm(algorithm);
        let result = compute_diff(original, revised, Some(config));

        println!("{:?}: {}", algorithm, result.summary());
    }
    println!();
}
