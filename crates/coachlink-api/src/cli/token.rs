//! `coachlink token <user_id>`: mint a chat token locally.

use coachlink_core::service::token::TokenService;
use coachlink_infra::credentials::StreamCredentials;
use coachlink_infra::stream::StreamChatClient;
use coachlink_types::config::CoachlinkConfig;

/// Mint and print a token. Needs only the Stream credentials; no network call.
pub fn issue_token(config: &CoachlinkConfig, user_id: &str, json: bool) -> anyhow::Result<()> {
    let credentials = StreamCredentials::from_env()?;
    let api_key = credentials.api_key.clone();
    let service = TokenService::new(StreamChatClient::new(credentials, &config.stream)?);
    let token = service.issue_token(Some(user_id))?;

    if json {
        let out = serde_json::json!({
            "user_id": token.user_id,
            "token": token.token,
            "issued_at": token.issued_at,
            "api_key": api_key,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        println!();
        println!(
            "  {} Chat token for {}",
            console::style("🔑").bold(),
            console::style(&token.user_id).cyan()
        );
        println!();
        println!("  {}", console::style(&token.token).yellow());
        println!();
        println!(
            "  {}",
            console::style(format!("api key: {api_key}")).dim()
        );
        println!();
    }

    Ok(())
}
