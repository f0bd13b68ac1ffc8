use anyhow::Result;

use acala_sdk_core::{sort_tokens, Token, TokenParams, TokenRegistry};

fn main() -> Result<()> {
    env_logger::init();

    let registry = TokenRegistry::preset();
    let mut tokens = Vec::new();
    for entry in registry.tokens() {
        tokens.push(Token::new(TokenParams {
            chain: Some(entry.chain),
            name: entry.name.clone(),
            symbol: Some(entry.symbol.clone()),
            decimal: Some(entry.decimal),
        }));
    }
    // Registry iteration is unordered; the canonical sort fixes the output
    let tokens = sort_tokens(registry, tokens);

    println!("Acala SDK Preset Tokens:\n");
    for token in &tokens {
        let wire = serde_json::to_string(&token.to_chain_data())?;
        println!(
            "  {:<8} {:<20} chain={:<10} decimal={:<3} wire={}",
            token.symbol(),
            token.name(),
            token.chain(),
            token.decimal(),
            wire
        );
    }

    Ok(())
}
