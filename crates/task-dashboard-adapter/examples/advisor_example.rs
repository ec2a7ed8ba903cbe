/*
[INPUT]:  Starter task list and a request mode
[OUTPUT]: Suggestion and automation results printed to stdout
[POS]:    Examples - calling the remote advisor endpoints
[UPDATE]: When adding new advisor endpoints
*/

use task_dashboard_adapter::*;

/// Example: ask the hosted service to prioritize and automate the starter tasks
#[tokio::main]
async fn main() {
    println!("=== Task Dashboard Advisor Example ===\n");

    let client = match DashboardClient::new() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Failed to create client: {}", e);
            return;
        }
    };
    println!("✓ HTTP client created for {}\n", client.base_url());

    let tasks = Task::starter_list();

    println!("Requesting suggestion (mode={})...", RequestMode::Hybrid);
    match client.suggest(&tasks, Some(RequestMode::Hybrid)).await {
        Ok(outcome) => println!("✓ Suggestion:\n{}", outcome.display_text()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\nRequesting automation (mode={})...", RequestMode::Llm);
    match client.automate(&tasks, Some(RequestMode::Llm)).await {
        Ok(outcome) => println!("✓ Result:\n{}", outcome.display_text()),
        Err(e) => println!("✗ Error: {}", e),
    }

    println!("\n✓ Advisor example complete");
}
