//! Telegram message rendering for peg metrics.

use utils::{format_bps, format_money, format_pct, format_price};

use crate::types::PegPoolReport;

/// Renders the peg message in Telegram Markdown. Pure: identical inputs
/// yield identical text.
pub fn peg_message(
    reports: &[PegPoolReport],
    vwap: f64,
    reference_symbol: &str,
    stamp: &str,
) -> String {
    let mut parts = vec![format!("*{} Peg Monitor*", reference_symbol)];

    for report in reports {
        parts.extend([
            String::new(),
            format!("*{}*", report.name),
            format!(
                "  Price: {} ({})",
                format_price(report.price),
                format_bps(report.price)
            ),
            format!("  TVL: ${}", format_money(report.tvl_usd)),
            format!("  Volume (24h): ${}", format_money(report.volume_24h_usd)),
        ]);
        if let Some(composition) = &report.composition {
            let shares: Vec<String> = composition
                .iter()
                .map(|s| format!("{} {}", s.symbol, format_pct(s.share)))
                .collect();
            parts.push(format!("  Balances: {}", shares.join(" | ")));
        }
    }

    parts.extend([
        String::new(),
        format!("*VWAP:* {} ({})", format_price(vwap), format_bps(vwap)),
        String::new(),
        format!("_{}_", stamp),
    ]);
    parts.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::BalanceShare;

    fn reports() -> Vec<PegPoolReport> {
        vec![
            PegPoolReport {
                name: "USDS/USDC (Curve)".to_string(),
                price: 0.9995,
                tvl_usd: 12_400_000.0,
                volume_24h_usd: 1_234_567.89,
                composition: Some(vec![
                    BalanceShare {
                        symbol: "USDS".to_string(),
                        share: 0.483_871,
                    },
                    BalanceShare {
                        symbol: "USDC".to_string(),
                        share: 0.516_129,
                    },
                ]),
            },
            PegPoolReport {
                name: "USDS/DAI".to_string(),
                price: 1.00023,
                tvl_usd: 3_000_000.0,
                volume_24h_usd: 250_000.0,
                composition: None,
            },
        ]
    }

    #[test]
    fn peg_message_layout() {
        let msg = peg_message(&reports(), 0.9998, "USDS", "2026-08-30 12:00 UTC");
        let expected = "\
*USDS Peg Monitor*

*USDS/USDC (Curve)*
  Price: $0.9995 (-5.0 bps)
  TVL: $12,400,000.00
  Volume (24h): $1,234,567.89
  Balances: USDS 48.39% | USDC 51.61%

*USDS/DAI*
  Price: $1.0002 (+2.3 bps)
  TVL: $3,000,000.00
  Volume (24h): $250,000.00

*VWAP:* $0.9998 (-2.0 bps)

_2026-08-30 12:00 UTC_";
        assert_eq!(msg, expected);
    }

    #[test]
    fn missing_composition_omits_balances_line_only() {
        let msg = peg_message(&reports()[1..], 1.00023, "USDS", "stamp");
        assert!(!msg.contains("Balances:"));
        assert!(msg.contains("  Price: $1.0002 (+2.3 bps)"));
    }

    #[test]
    fn rendering_is_idempotent() {
        let a = peg_message(&reports(), 0.9998, "USDS", "stamp");
        let b = peg_message(&reports(), 0.9998, "USDS", "stamp");
        assert_eq!(a, b);
    }
}
