//! Render the bread-slice dashboard to a file.
//!
//! Run with: `cargo run -p nutrition-report --example bread_slice`

use nutrition_report::{RenderOptions, render_dashboard};

fn main() -> std::io::Result<()> {
    let html = render_dashboard(&RenderOptions::default());

    let output_path = "bread_slice.html";
    std::fs::write(output_path, &html)?;

    println!("Dashboard written to: {}", output_path);
    println!("HTML size: {} bytes", html.len());
    Ok(())
}
