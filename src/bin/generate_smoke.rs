use anyhow::{Result, anyhow};
use report_agent_svc::agent::{Agent, AgentRunner, ContextVariables, OpenRouterRunner};
use report_agent_svc::config::Config;
use report_agent_svc::init_tracing;
use report_agent_svc::models::GenerateRequest;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    println!("🚀 Report generation smoke test");
    println!("{}", "=".repeat(50));

    let mut args = std::env::args().skip(1);
    let prompt = args
        .next()
        .ok_or_else(|| anyhow!("usage: generate-smoke <prompt> [context]"))?;
    let request = GenerateRequest {
        prompt,
        context: args.next(),
    };

    let config = Config::from_env()?;
    init_tracing(&config);
    let runner = OpenRouterRunner::from_env()?;
    let agent = Agent::dummy(config.model.as_str());

    println!("Model: {}", agent.model);
    println!("Outbound message:");
    println!("{}", "─".repeat(60));
    println!("{}", request.message_content());
    println!("{}", "─".repeat(60));

    let response = runner
        .run(
            &agent,
            request.to_messages(),
            &ContextVariables::new(),
            config.agent_debug,
        )
        .await?;

    let report = response.into_report()?;
    println!("✅ Report received ({} characters)", report.len());
    println!("\n📄 Report:");
    println!("{}", "─".repeat(60));
    println!("{}", report);
    println!("{}", "─".repeat(60));

    println!("\n🏁 Smoke test completed!");
    Ok(())
}
