/*
[INPUT]:  Member credentials from the environment
[OUTPUT]: Strategy listing and a submitted market order
[POS]:    Examples - login and trading flow
[UPDATE]: When the trading API changes
*/

use bincentive_trader::*;
use rust_decimal::Decimal;
use std::str::FromStr;

/// Example: login and trading flow
///
/// 1. Log in with email/password (establishes the session)
/// 2. List approved strategies
/// 3. Submit a market order for the first one
///
/// Set BINCENTIVE_EMAIL and BINCENTIVE_PASSWORD before running.
#[tokio::main]
async fn main() {
    println!("=== Bincentive Trading Example ===\n");

    let email = match std::env::var("BINCENTIVE_EMAIL") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("BINCENTIVE_EMAIL is not set");
            return;
        }
    };
    let password = match std::env::var("BINCENTIVE_PASSWORD") {
        Ok(v) => v,
        Err(_) => {
            eprintln!("BINCENTIVE_PASSWORD is not set");
            return;
        }
    };

    let client = match TraderClient::login(&email, &password, Environment::Testing).await {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Login failed: {}", e);
            return;
        }
    };
    println!("✓ Logged in");

    let strategies = match client.strategy_list(None).await {
        Ok(list) => list,
        Err(e) => {
            eprintln!("Failed to list strategies: {}", e);
            return;
        }
    };
    println!("✓ {} strategies approved", strategies.len());
    for strategy in &strategies {
        println!("  [{}] {}", strategy.strategy_id, strategy.strategy_name);
    }

    let Some(first) = strategies.first() else {
        println!("\nNo strategy to trade on; stopping here.");
        return;
    };

    let ratio = Decimal::from_str("0.1").unwrap_or_default();
    let limit_price = Decimal::from_str("50000").unwrap_or_default();
    match client
        .submit_market_order(first.strategy_id, ratio, limit_price, None)
        .await
    {
        Ok(Some(signal_id)) => println!("\n✓ Order created, signal id {}", signal_id),
        Ok(None) => println!("\nGateway accepted the call but created no order"),
        Err(e) => eprintln!("\nOrder failed: {}", e),
    }
}
