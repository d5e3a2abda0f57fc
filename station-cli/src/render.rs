use station_core::{Page, SettingsSummary};

/// Plain-text rendering of every page, separated by blank lines.
pub fn pages(pages: &[Page]) -> String {
    pages.iter().map(page).collect::<Vec<_>>().join("\n")
}

fn page(page: &Page) -> String {
    let mut out = format!("== {} ==\n", page.label);

    if let Some(message) = page.message {
        out.push_str(&format!("  {message}\n"));
    }
    for tile in &page.tiles {
        out.push_str(&format!("  {:<24} {}\n", format!("{}:", tile.title), tile.content));
    }

    out
}

pub fn settings(summary: &SettingsSummary) -> String {
    let mut out = String::from("== Personalization ==\n");
    out.push_str(&format!("  Accent color:      {}\n", summary.accent_color));
    out.push_str(&format!(
        "  Unit:              {} (available: {})\n",
        summary.temperature_unit,
        summary.available_units.join(", ")
    ));
    if !summary.station_name.is_empty() {
        out.push_str(&format!("  Station name:      {}\n", summary.station_name));
    }

    let diag = &summary.diagnostics;
    out.push_str("\n== Weather station ==\n");
    out.push_str(&format!("  Battery:           {}\n", diag.battery));
    out.push_str(&format!("  Update status:     {}\n", diag.update_status));
    out.push_str(&format!("  Location:          {}\n", diag.location));
    out.push_str(&format!("  Software version:  {}\n", diag.software_version));

    if let Some(capital) = &summary.capital_city {
        out.push_str("\n== Capital city ==\n");
        out.push_str(&format!("  {}\n", capital.as_deref().unwrap_or("(none)")));
    }

    out.push_str("\n== Info ==\n");
    out.push_str(&format!("  Version: {}\n", summary.app_version));

    out
}
