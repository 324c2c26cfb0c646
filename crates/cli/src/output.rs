use ferrous_arp_domain::NeighborRecord;

const ABSENT: &str = "-";
const HEADERS: [&str; 4] = ["IP", "MAC", "INTERFACE", "NAME"];

pub fn render_mac(record: &NeighborRecord, json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(record)?);
    }
    Ok(record.mac.as_deref().unwrap_or(ABSENT).to_string())
}

pub fn render_table(records: &[NeighborRecord], json: bool) -> anyhow::Result<String> {
    if json {
        return Ok(serde_json::to_string_pretty(records)?);
    }

    let rows: Vec<[&str; 4]> = records
        .iter()
        .map(|r| {
            [
                r.ip.as_deref().unwrap_or(ABSENT),
                r.mac.as_deref().unwrap_or(ABSENT),
                r.interface.as_deref().unwrap_or(ABSENT),
                r.name.as_deref().unwrap_or(ABSENT),
            ]
        })
        .collect();

    let mut widths = HEADERS.map(str::len);
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }

    let lines: Vec<String> = std::iter::once(HEADERS)
        .chain(rows)
        .map(|row| format_row(&row, &widths))
        .collect();

    Ok(lines.join("\n"))
}

fn format_row(row: &[&str; 4], widths: &[usize; 4]) -> String {
    row.iter()
        .zip(widths)
        .map(|(cell, width)| format!("{:<width$}", cell, width = *width))
        .collect::<Vec<_>>()
        .join("  ")
        .trim_end()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gateway() -> NeighborRecord {
        NeighborRecord::new("10.0.0.138", "e8:fc:af:a1:f7:17")
            .with_name("gateway")
            .with_interface("wlan0")
    }

    #[test]
    fn test_render_mac_plain() {
        assert_eq!(render_mac(&gateway(), false).unwrap(), "e8:fc:af:a1:f7:17");
    }

    #[test]
    fn test_render_mac_absent() {
        let record = NeighborRecord {
            ip: Some("10.0.0.5".to_string()),
            ..Default::default()
        };

        assert_eq!(render_mac(&record, false).unwrap(), "-");
    }

    #[test]
    fn test_render_mac_json() {
        let rendered = render_mac(&gateway(), true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value["mac"], "e8:fc:af:a1:f7:17");
        assert_eq!(value["interface"], "wlan0");
    }

    #[test]
    fn test_render_table_aligns_columns() {
        let records = vec![
            gateway(),
            NeighborRecord {
                ip: Some("10.0.0.5".to_string()),
                ..Default::default()
            },
        ];

        let rendered = render_table(&records, false).unwrap();
        let lines: Vec<&str> = rendered.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "IP          MAC                INTERFACE  NAME");
        assert_eq!(lines[1], "10.0.0.138  e8:fc:af:a1:f7:17  wlan0      gateway");
        assert_eq!(lines[2], "10.0.0.5    -                  -          -");
    }

    #[test]
    fn test_render_table_json_array() {
        let rendered = render_table(&[gateway()], true).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

        assert_eq!(value.as_array().map(Vec::len), Some(1));
        assert_eq!(value[0]["name"], "gateway");
    }
}
