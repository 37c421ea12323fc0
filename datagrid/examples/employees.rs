//! Employee Grid Example
//!
//! Drives the grid state manager headlessly: search, sort, range selection
//! and CSV export over a small employee dataset.

use std::fs::File;

use datagrid::prelude::*;
use simplelog::{Config, LevelFilter, WriteLogger};

fn create_columns() -> Vec<Column> {
    vec![
        Column::new("name", "Name").width(180),
        Column::new("department", "Department").width(140),
        Column::new("salary", "Salary").data_type(DataType::Int).width(100),
        Column::new("hired", "Hire Date")
            .data_type(DataType::DateTime)
            .date_format("%Y-%m-%d")
            .width(110),
        Column::new("remote", "Remote").data_type(DataType::Bool).width(80),
        Column::new("profile", "Profile").data_type(DataType::Link).width(200),
    ]
}

fn create_rows() -> Vec<Row> {
    let people = [
        ("1", "Alice Smith", "Engineering", 90000, "2019-04-01", true),
        ("2", "Bob Johnson", "Sales", 50000, "2021-09-15", false),
        ("3", "Carol Williams", "Engineering", 72000, "2020-01-20", true),
        ("4", "Dave Brown", "Marketing", 61000, "2022-06-01", false),
        ("5", "Eve Jones", "Engineering", 83000, "2018-11-30", false),
    ];
    people
        .into_iter()
        .map(|(id, name, department, salary, hired, remote)| {
            Row::new(id)
                .cell("name", name)
                .cell("department", department)
                .cell("salary", salary as i64)
                .cell("hired", hired)
                .cell("remote", remote)
                .cell("profile", format!("https://intranet.example.com/people/{id}"))
        })
        .collect()
}

fn print_view(grid: &Grid) {
    let columns = grid.ordered_columns();
    let headers: Vec<&str> = columns.iter().map(|c| c.header.as_str()).collect();
    println!("{}", headers.join(" | "));
    for row in grid.view() {
        let cells: Vec<String> = columns
            .iter()
            .map(|c| datagrid::format::format_cell(c, row.get(&c.key), grid.bool_tokens()))
            .collect();
        println!("{}", cells.join(" | "));
    }
    println!();
}

fn main() {
    let log_file = File::create("employees.log").expect("Failed to create log file");
    WriteLogger::init(LevelFilter::Debug, Config::default(), log_file)
        .expect("Failed to initialize logger");

    let mut grid = Grid::new(create_columns())
        .with_selection_mode(SelectionMode::Multi)
        .with_storage(Box::new(SharedMemoryStore::new()), "employees")
        .on_selection_change(|ids| println!("-> selection is now {ids:?}"))
        .on_link_activate(|id, key, value| {
            println!("-> open {} (row {id}, column {key})", value.raw_string());
        });
    grid.set_rows(create_rows());

    println!("# Full view");
    print_view(&grid);

    println!("# Engineering only, highest salary first");
    grid.set_search("engineering");
    grid.header_click("salary");
    grid.header_click("salary");
    print_view(&grid);

    println!("# Range-select the top two rows");
    let view = grid.view_ids();
    grid.row_click(&view[0], Modifiers::NONE);
    grid.row_click(&view[1], Modifiers::SHIFT);

    println!("\n# Follow a profile link");
    grid.link_click(&view[0], "profile");

    println!("\n# CSV export ({})", grid.export_file_name());
    match grid.export_csv() {
        Ok(csv) => println!("{csv}"),
        Err(err) => eprintln!("export failed: {err}"),
    }
}
