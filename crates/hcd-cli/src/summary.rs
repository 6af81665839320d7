use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use hcd_core::{Dataset, RecordDetail, SearchOutcome, display_or_empty};
use hcd_ingest::SourceReport;

const NO_RESULTS: &str = "查無資料";

pub fn print_results(outcome: &SearchOutcome<'_>) {
    println!("{}", outcome.status_line());
    if outcome.rows.is_empty() {
        println!("{NO_RESULTS}");
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("名稱"),
        header_cell("地址"),
        header_cell("電話"),
        header_cell("整合團隊"),
        header_cell("縣市"),
        header_cell("鄉鎮市區"),
        header_cell("來源"),
    ]);
    apply_table_style(&mut table);
    for record in &outcome.rows {
        table.add_row(vec![
            Cell::new(&record.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(&record.address),
            text_cell(&record.phone),
            text_cell(&record.team),
            Cell::new(record.region.as_str()),
            Cell::new(record.sub_region.as_str()),
            Cell::new(record.source.label()),
        ]);
    }
    println!("{table}");
    println!("{}", outcome.page_label());
}

pub fn print_regions(dataset: &Dataset) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("縣市"),
        header_cell("筆數"),
        header_cell("鄉鎮市區"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (region, districts) in dataset.district_index().iter() {
        let count = dataset
            .records()
            .iter()
            .filter(|record| record.region == region)
            .count();
        let names: Vec<&str> = districts.iter().map(|district| district.as_str()).collect();
        table.add_row(vec![
            Cell::new(region.as_str())
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(count),
            Cell::new(names.join("、")),
        ]);
    }
    println!("{table}");
}

pub fn print_detail(detail: &RecordDetail<'_>) {
    let mut table = Table::new();
    apply_table_style(&mut table);
    for (label, value) in detail.fields() {
        table.add_row(vec![header_cell(label), text_cell(value)]);
    }
    println!("{table}");
    println!("地圖: {}", detail.map_url());

    let Some(service) = detail.services else {
        println!("服務項目: {}", display_or_empty(""));
        return;
    };
    let mut flags = Table::new();
    flags.set_header(vec![header_cell("服務項目"), header_cell("提供")]);
    apply_summary_table_style(&mut flags);
    align_column(&mut flags, 1, CellAlignment::Center);
    for flag in &service.flags {
        let provided = if flag.provided {
            Cell::new("✓").fg(Color::Green).add_attribute(Attribute::Bold)
        } else {
            dim_cell("-")
        };
        flags.add_row(vec![Cell::new(&flag.label), provided]);
    }
    println!("{flags}");
}

pub fn print_sources(reports: &[SourceReport]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("檔案"),
        header_cell("類別"),
        header_cell("筆數"),
        header_cell("狀態"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for report in reports {
        let category = report
            .category
            .map_or("服務項目", |category| category.label());
        let status = match &report.error {
            None => Cell::new("OK").fg(Color::Green),
            Some(error) => Cell::new(error).fg(Color::Red),
        };
        table.add_row(vec![
            Cell::new(report.path.display()),
            Cell::new(category),
            Cell::new(report.rows),
            status,
        ]);
    }
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn text_cell(value: &str) -> Cell {
    let shown = display_or_empty(value);
    if shown == value.trim() {
        Cell::new(shown)
    } else {
        dim_cell(shown)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
