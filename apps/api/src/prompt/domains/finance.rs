//! Trading and personal-finance builders. Trading derives a market sub-mood
//! (stocks / crypto / forex) from the router's secondary pattern tests.

use serde::{Deserialize, Serialize};

use crate::prompt::sections::{
    join_sections, memory_spec, speed_line, tier_block, PILL_RULES, WEB_SEARCH_RULES,
};
use crate::prompt::types::PromptOptions;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradingFocus {
    #[default]
    Stocks,
    Crypto,
    Forex,
}

const TRADING_ROLE: &str = "\
You are 6IXAI as a markets educator. You teach how instruments, order types, \
and chart patterns work. You never give buy/sell calls, price targets, or \
portfolio allocations — every reply that touches a decision says clearly \
that this is education, not financial advice.";

const TRADING_FREE: &str = "\
PLAN: free tier. One concept or chart pattern explained per reply. \
Backtesting walkthroughs and watchlist reviews come with 6ix Pro.";

const TRADING_PAID: &str = "\
PLAN: pro/max tier. Multi-step strategy education, backtesting walkthroughs, \
risk-management frameworks, and trade-journal templates are in scope.";

fn focus_block(focus: TradingFocus) -> &'static str {
    match focus {
        TradingFocus::Stocks => {
            "MARKET: equities. Earnings, valuation multiples, index funds vs. \
             single names, and order mechanics are fair game."
        }
        TradingFocus::Crypto => {
            "MARKET: crypto. Explain custody, gas, slippage, and protocol risk \
             plainly. Flag that unaudited tokens and leverage wipe accounts."
        }
        TradingFocus::Forex => {
            "MARKET: forex. Pairs, pips, lot sizes, and session timing. Be blunt \
             that retail leverage is where most accounts die."
        }
    }
}

pub fn build_trading_system(opts: &PromptOptions, focus: TradingFocus) -> String {
    let currency = opts
        .currency
        .as_deref()
        .map(|c| format!("Quote examples in {c} unless the user uses another currency."))
        .unwrap_or_default();
    join_sections([
        TRADING_ROLE.to_string(),
        focus_block(focus).to_string(),
        currency,
        tier_block(opts.plan, TRADING_FREE, TRADING_PAID),
        speed_line(opts.speed).to_string(),
        WEB_SEARCH_RULES.to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "trading", "\"market\":\"...\",\"topic\":\"...\""),
    ])
}

const FINANCE_ROLE: &str = "\
You are 6IXAI as a personal-finance coach: budgets, debt payoff order, \
emergency funds, and how common products work (credit scores, mortgages, \
retirement accounts). Education only — no individualized investment advice.";

const FINANCE_FREE: &str = "\
PLAN: free tier. One money question per reply with a worked example. \
Budget spreadsheets and payoff schedules come with 6ix Pro.";

const FINANCE_PAID: &str = "\
PLAN: pro/max tier. Budget templates, debt-payoff schedules comparing \
avalanche vs. snowball, and savings-goal plans are in scope, with exports.";

pub fn build_personal_finance_system(opts: &PromptOptions) -> String {
    join_sections([
        FINANCE_ROLE.to_string(),
        tier_block(opts.plan, FINANCE_FREE, FINANCE_PAID),
        speed_line(opts.speed).to_string(),
        PILL_RULES.to_string(),
        memory_spec(opts.plan, "finance", "\"goal\":\"...\",\"monthly_budget\":{}"),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::types::Plan;

    #[test]
    fn test_trading_never_drops_advice_disclaimer() {
        for plan in [Plan::Free, Plan::Pro, Plan::Max] {
            let out = build_trading_system(
                &PromptOptions {
                    plan,
                    ..Default::default()
                },
                TradingFocus::Crypto,
            );
            assert!(out.contains("not financial advice"));
        }
    }

    #[test]
    fn test_trading_focus_selects_one_market_block() {
        let out = build_trading_system(&PromptOptions::default(), TradingFocus::Forex);
        assert!(out.contains("MARKET: forex"));
        assert!(!out.contains("MARKET: equities"));
        assert!(!out.contains("MARKET: crypto"));
    }

    #[test]
    fn test_trading_currency_interpolation_degrades_gracefully() {
        let out = build_trading_system(&PromptOptions::default(), TradingFocus::Stocks);
        assert!(!out.contains("Quote examples in"));
        assert!(!out.contains("\n\n\n"));

        let with = build_trading_system(
            &PromptOptions {
                currency: Some("EUR".to_string()),
                ..Default::default()
            },
            TradingFocus::Stocks,
        );
        assert!(with.contains("Quote examples in EUR"));
    }

    #[test]
    fn test_personal_finance_free_lacks_exports() {
        let out = build_personal_finance_system(&PromptOptions::default());
        assert!(out.contains("free tier"));
        assert!(!out.contains("avalanche vs. snowball"));
    }
}
