//! Formatted terminal output.
//!
//! We keep formatting code in one place so:
//! - the table/polynomial code stays clean and testable
//! - output changes are localized

use nalgebra::DMatrix;

use crate::domain::{CoefficientSet, Transform};
use crate::math::Marginal;
use crate::report::TableRow;

/// Format a single pair transform (inputs, coefficients, result).
pub fn format_transform(t: &Transform) -> String {
    let mut out = String::new();
    let i = &t.inputs;

    out.push_str("=== nataf - Nataf correlation transform ===\n");
    out.push_str(&format!(
        "Dist1: {} ({})\n",
        i.dist1.code(),
        i.dist1.display_name()
    ));
    out.push_str(&format!(
        "Dist2: {} ({})\n",
        i.dist2.code(),
        i.dist2.display_name()
    ));
    out.push_str(&format!(
        "Corr={} | CoV1={} | CoV2={}\n",
        i.corr, i.cov1, i.cov2
    ));

    out.push_str("\nCoefficients:\n");
    out.push_str(&format!("  {}\n", fmt_coefficients(&t.coefficients)));

    out.push_str("\nResult:\n");
    out.push_str(&format!("- R     : {:.6}\n", t.result.r));
    out.push_str(&format!("- CorrY : {:.6}\n", t.result.corr_y));
    if t.result.corr_y.is_finite() && t.result.corr_y.abs() > 1.0 {
        out.push_str("  (|CorrY| > 1: outside the range of the approximation)\n");
    }

    out
}

/// Format the coefficient table listing.
pub fn format_table(rows: &[TableRow]) -> String {
    let mut out = String::new();
    let evaluated = rows.iter().any(|r| r.result.is_some());

    let mut header = format!("{:<5} {:<5} ", "dist1", "dist2");
    for name in CoefficientSet::NAMES {
        header.push_str(&format!("{name:>7} "));
    }
    if evaluated {
        header.push_str(&format!("{:>10} {:>10}", "R", "CorrY"));
    }
    out.push_str(header.trim_end());
    out.push('\n');

    let width = header.trim_end().chars().count();
    out.push_str(&"-".repeat(width));
    out.push('\n');

    for row in rows {
        let mut line = format!("{:<5} {:<5} ", row.dist1.code(), row.dist2.code());
        match &row.coefficients {
            Some(c) => {
                for v in c.to_array() {
                    line.push_str(&format!("{v:>7.3} "));
                }
            }
            None => {
                line.push_str(&format!("{:<79} ", "(formula; evaluated at call time)"));
            }
        }
        if let Some(res) = &row.result {
            line.push_str(&format!("{:>10.6} {:>10.6}", res.r, res.corr_y));
        }
        out.push_str(line.trim_end());
        out.push('\n');
    }

    out
}

/// Format a correlation sweep as a table.
pub fn format_sweep(rows: &[Transform]) -> String {
    let mut out = String::new();
    let Some(first) = rows.first() else {
        return "(empty sweep)\n".to_string();
    };

    out.push_str(&format!(
        "Sweep: Dist1={} Dist2={} CoV1={} CoV2={}\n",
        first.inputs.dist1.code(),
        first.inputs.dist2.code(),
        first.inputs.cov1,
        first.inputs.cov2
    ));
    out.push_str(&format!("{:>10} {:>10} {:>10}\n", "corr", "R", "corr_y"));
    out.push_str(&format!("{:->10} {:->10} {:->10}\n", "", "", ""));
    for t in rows {
        out.push_str(&format!(
            "{:>10.4} {:>10.6} {:>10.6}\n",
            t.inputs.corr, t.result.r, t.result.corr_y
        ));
    }
    out
}

/// Format a matrix transform: marginals, y-space correlations, and the Cholesky factor.
pub fn format_matrix(
    marginals: &[Marginal],
    corr_y: &DMatrix<f64>,
    cholesky: Option<&DMatrix<f64>>,
) -> String {
    let mut out = String::new();

    out.push_str("Variables:\n");
    for (idx, m) in marginals.iter().enumerate() {
        out.push_str(&format!(
            "  [{idx}] {:<12} {:<3} CoV={}\n",
            truncate(&m.name, 12),
            m.dist.code(),
            m.cov
        ));
    }

    out.push_str("\nCorrelation (y-space):\n");
    out.push_str(&fmt_matrix(corr_y));

    match cholesky {
        Some(l) => {
            out.push_str("\nCholesky factor L (L·Lᵀ = corr_y):\n");
            out.push_str(&fmt_matrix(l));
        }
        None => out.push_str("\ncorr_y is not positive definite; no Cholesky factor.\n"),
    }

    out
}

fn fmt_coefficients(c: &CoefficientSet) -> String {
    let parts: Vec<String> = CoefficientSet::NAMES
        .iter()
        .zip(c.to_array())
        .map(|(name, v)| format!("{name}={v}"))
        .collect();
    parts.join(" ")
}

fn fmt_matrix(m: &DMatrix<f64>) -> String {
    let mut out = String::new();
    for i in 0..m.nrows() {
        let row: Vec<String> = (0..m.ncols()).map(|j| format!("{:>10.6}", m[(i, j)])).collect();
        out.push_str(&format!("  {}\n", row.join(" ")));
    }
    out
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for (i, ch) in s.chars().enumerate() {
        if i + 1 >= max {
            break;
        }
        out.push(ch);
    }
    out.push('.');
    out
}
