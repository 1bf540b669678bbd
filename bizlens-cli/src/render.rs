//! Card-style rendering of backend payloads.
//!
//! Backend JSON is opaque to the gateway; this module looks up the named
//! fields the backends are known to emit and silently skips anything missing
//! or mistyped. Unknown fields are never an error.

use serde_json::Value;

const RULE: &str = "------------------------------------------------------------";
const BAR_WIDTH: usize = 40;

fn heading(title: &str) {
    println!("{RULE}");
    println!("{title}");
    println!("{RULE}");
}

/// Walk a dotted path of object keys.
fn lookup<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Value> {
    let mut current = value;
    for key in path {
        current = current.get(key)?;
    }
    Some(current)
}

fn lookup_str<'a>(value: &'a Value, path: &[&str]) -> Option<&'a str> {
    lookup(value, path)?.as_str()
}

fn lookup_f64(value: &Value, path: &[&str]) -> Option<f64> {
    lookup(value, path)?.as_f64()
}

fn lookup_array<'a>(value: &'a Value, path: &[&str]) -> Option<&'a Vec<Value>> {
    lookup(value, path)?.as_array()
}

fn bullet_list(title: &str, items: &[Value]) {
    let lines: Vec<&str> = items.iter().filter_map(|i| i.as_str()).collect();
    if lines.is_empty() {
        return;
    }
    println!("{title}:");
    for line in lines {
        println!("  - {line}");
    }
    println!();
}

/// Render a comprehensive research report.
pub fn research_report(report: &Value) {
    heading("Research Report");

    if let Some(overview) = lookup_str(report, &["executive_summary", "business_overview"]) {
        println!("{overview}\n");
    }
    if let Some(opportunity) = lookup_str(report, &["executive_summary", "market_opportunity"]) {
        println!("Market opportunity: {opportunity}\n");
    }
    if let Some(findings) = lookup_array(report, &["executive_summary", "key_findings"]) {
        bullet_list("Key findings", findings);
    }

    if let Some(score) = lookup_f64(report, &["business_viability", "viability_score"]) {
        println!("Viability score: {score:.1}/100");
    }
    if let Some(action) =
        lookup_str(report, &["executive_summary", "searchapi_based_recommendation"])
    {
        println!("Recommended action: {action}");
    }
    println!();

    if let Some(competitors) =
        lookup_array(report, &["market_analysis", "competitive_landscape", "top_competitors"])
    {
        let named: Vec<String> = competitors
            .iter()
            .filter_map(|c| {
                let name = c.get("name")?.as_str()?;
                match c.get("rating").and_then(Value::as_f64) {
                    Some(rating) => Some(format!("{name} (rated {rating:.1})")),
                    None => Some(name.to_string()),
                }
            })
            .collect();
        if !named.is_empty() {
            println!("Top competitors:");
            for competitor in named {
                println!("  - {competitor}");
            }
            println!();
        }
    }

    if let Some(trend) =
        lookup_str(report, &["market_analysis", "market_trends", "trend_summary"])
    {
        println!("Market trend: {trend}");
        if let Some(interest) =
            lookup_f64(report, &["market_analysis", "market_trends", "average_interest"])
        {
            println!("Average search interest: {interest:.0}/100");
        }
        println!();
    }

    if let Some(recommendations) =
        lookup_array(report, &["business_viability", "strategic_recommendations"])
    {
        bullet_list("Strategic recommendations", recommendations);
    }
}

/// Render a city-opportunities report.
pub fn opportunities(report: &Value) {
    heading("City Opportunities");

    if let Some(city) = lookup_str(report, &["city_info", "name"]) {
        println!("City: {city}\n");
    }

    if let Some(top) =
        lookup_array(report, &["business_opportunities", "top_recommendations"])
    {
        for (rank, opportunity) in top.iter().enumerate() {
            let Some(business) = lookup_str(opportunity, &["business_type"]) else {
                continue;
            };
            println!("{}. {business}", rank + 1);
            if let Some(score) = lookup_f64(opportunity, &["viability_score"]) {
                println!("   viability {score:.0}/100");
            }
            if let Some(competition) = lookup_str(opportunity, &["competition_level"]) {
                println!("   competition {competition}");
            }
            if let Some(growth) = lookup_str(opportunity, &["growth_potential"]) {
                println!("   growth {growth}");
            }
        }
        println!();
    }
}

/// Render the initial CSV analysis returned by an upload.
pub fn csv_analysis(analysis: &Value) {
    heading("CSV Analysis");

    if let Some(insights) = lookup_array(analysis, &["insights"]) {
        bullet_list("Insights", insights);
    }
    if let Some(anomalies) = lookup_array(analysis, &["anomalies"]) {
        bullet_list("Anomalies", anomalies);
    }
    if let Some(recommendations) = lookup_array(analysis, &["recommendations"]) {
        bullet_list("Recommendations", recommendations);
    }

    if let Some(charts) = lookup_array(analysis, &["chart_data"]) {
        for spec in charts {
            chart(spec);
        }
    }
}

/// Render a CSV chat reply: the backend wraps the model's structured answer
/// under `parsed`, with the raw text under `response` as a fallback.
pub fn csv_reply(reply: &Value) {
    let answer = lookup_str(reply, &["parsed", "answer"])
        .or_else(|| lookup_str(reply, &["response"]));

    match answer {
        Some(text) => println!("\n{text}\n"),
        None => println!("\n{reply:#}\n"),
    }

    if let Some(follow_ups) = lookup_array(reply, &["parsed", "followUp"]) {
        bullet_list("You could ask", follow_ups);
    }
}

/// Pretty-print an arbitrary payload (raw scraped data, health probes).
pub fn json(value: &Value) {
    match serde_json::to_string_pretty(value) {
        Ok(pretty) => println!("{pretty}"),
        Err(_) => println!("{value}"),
    }
}

/// Chart-type dispatcher: each known type renders its own textual shape,
/// anything else is named and skipped.
fn chart(spec: &Value) {
    let chart_type = spec.get("type").and_then(Value::as_str).unwrap_or("bar");
    let title = spec
        .get("title")
        .and_then(Value::as_str)
        .map(str::to_string)
        .unwrap_or_else(|| chart_title_from_axes(spec, chart_type));

    let Some(data) = spec.get("data").and_then(Value::as_array) else {
        return;
    };
    if data.is_empty() {
        return;
    }

    println!("[{chart_type}] {title}");
    match chart_type {
        "bar" | "line" => axis_chart(spec, data),
        "pie" => pie_chart(data),
        "hist" => histogram(data),
        other => println!("  (no renderer for chart type {other:?})"),
    }
    println!();
}

fn chart_title_from_axes(spec: &Value, chart_type: &str) -> String {
    let x = spec.get("x").and_then(Value::as_str).unwrap_or("x");
    let y = spec.get("y").and_then(Value::as_str).unwrap_or("y");
    match chart_type {
        "hist" => format!("distribution of {y}"),
        _ => format!("{y} by {x}"),
    }
}

/// Bar and line charts arrive as records keyed by the x/y column names.
fn axis_chart(spec: &Value, data: &[Value]) {
    let Some(x_col) = spec.get("x").and_then(Value::as_str) else { return };
    let Some(y_col) = spec.get("y").and_then(Value::as_str) else { return };

    let rows: Vec<(String, f64)> = data
        .iter()
        .filter_map(|record| {
            let label = match record.get(x_col)? {
                Value::String(s) => s.clone(),
                other => other.to_string(),
            };
            let value = record.get(y_col)?.as_f64()?;
            Some((label, value))
        })
        .collect();

    scaled_bars(&rows);
}

/// Pie slices arrive as `{name, value}` records.
fn pie_chart(data: &[Value]) {
    let rows: Vec<(String, f64)> = data
        .iter()
        .filter_map(|record| {
            let name = record.get("name")?.as_str()?.to_string();
            let value = record.get("value")?.as_f64()?;
            Some((name, value))
        })
        .collect();

    let total: f64 = rows.iter().map(|(_, v)| v).sum();
    if total <= 0.0 {
        return;
    }
    for (name, value) in rows {
        println!("  {name}: {:.1}%", value / total * 100.0);
    }
}

/// Histograms arrive as bare `{value}` records; summarize the distribution.
fn histogram(data: &[Value]) {
    let values: Vec<f64> =
        data.iter().filter_map(|record| record.get("value")?.as_f64()).collect();
    if values.is_empty() {
        return;
    }

    let min = values.iter().copied().fold(f64::INFINITY, f64::min);
    let max = values.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let mean = values.iter().sum::<f64>() / values.len() as f64;

    println!("  n={} min={min:.2} mean={mean:.2} max={max:.2}", values.len());
}

fn scaled_bars(rows: &[(String, f64)]) {
    let max = rows.iter().map(|(_, v)| v.abs()).fold(0.0_f64, f64::max);
    if max <= 0.0 {
        return;
    }

    let label_width =
        rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0).min(20);
    for (label, value) in rows {
        let width = ((value.abs() / max) * BAR_WIDTH as f64).round() as usize;
        let shown: String = label.chars().take(label_width).collect();
        println!("  {shown:<label_width$} {} {value}", "#".repeat(width.max(1)));
    }
}
