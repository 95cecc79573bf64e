//! Entry session walkthrough
//!
//! Stages a production run and a sale order the way the entry forms do,
//! prints the staged tables, then tries to submit both against a backend
//! on localhost.
//!
//! Run: cargo run --example entry_session

use millbook_client::{ClientConfig, ProductionSession, SaleSession, session};
use shared::document::DocPrefix;
use shared::models::{Item, Machine, Operator, Party};
use shared::report::{ProductionTotals, SaleTotals};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let operators = vec![Operator {
        id: 1,
        name: "R. Patel".into(),
        mobile: "9000000001".into(),
        address: "Unit 4".into(),
        created_at: None,
    }];
    let machines = vec![Machine {
        id: 1,
        name: "Extruder 1".into(),
        remarks: String::new(),
        created_at: None,
    }];
    let parties = vec![Party {
        id: 5,
        name: "Sharma Traders".into(),
        mobile: "9000000002".into(),
        address: "Market Rd".into(),
        created_at: None,
    }];
    let items = vec![
        Item {
            id: 10,
            name: "HDPE Pipe".into(),
            kind: "Finished".into(),
            created_at: None,
        },
        Item {
            id: 11,
            name: "PVC Pipe".into(),
            kind: "Finished".into(),
            created_at: None,
        },
    ];

    // ---- Production entry ----
    let mut production = ProductionSession::new(
        DocPrefix::Production.first(),
        session::today(),
        operators,
        machines,
        items.clone(),
    );
    production.set_shift("Day");
    production.select_operator(Some(1));

    production.select_item(Some(10));
    production.select_machine(Some(1));
    production.set_length("120");
    production.set_weight("36.5");
    production.add_item()?;

    production.select_item(Some(11));
    production.set_length("80");
    production.set_weight("22");
    production.set_remarks("second batch");
    production.add_item()?;

    println!("\nProduction {} ({})", production.number(), production.date());
    for row in production.rows() {
        println!(
            "  [{}] {} on {} - {}m / {}kg {}",
            row.index,
            row.item.item_name,
            row.item.machine_name,
            row.item.length,
            row.item.weight,
            row.item.remarks
        );
    }
    let totals = ProductionTotals::from_items(production.staged());
    println!(
        "  totals: {}m, {}kg over {} items",
        totals.total_length, totals.total_weight, totals.total_items
    );

    // ---- Sale entry ----
    let mut sale = SaleSession::new(DocPrefix::Job.first(), session::today(), parties, items);
    sale.select_party(Some(5));
    sale.select_item(Some(10));
    sale.set_quantity("3");
    sale.set_rate("12.5");
    sale.add_item()?;

    println!("\nSale {} ({})", sale.order_no(), sale.date());
    for row in sale.rows() {
        println!(
            "  [{}] {} x{} @ {} = {}",
            row.index, row.item.item_name, row.item.quantity, row.item.rate, row.item.amount
        );
    }
    let sale_totals = SaleTotals::from_orders(&[sale.payload()?]);
    println!("  totals: {} across {} orders", sale_totals.total_amount, sale_totals.total_orders);

    // ---- Submit (needs a backend on localhost:5000) ----
    let client = ClientConfig::default().build_http_client();
    match production.submit(&client).await {
        Ok(ack) => println!("\n{} (next: {})", ack.message, production.number()),
        Err(e) => println!("\nProduction submit failed: {e}"),
    }
    match sale.submit(&client).await {
        Ok(ack) => println!("{} (next: {})", ack.message, sale.order_no()),
        Err(e) => println!("Sale submit failed: {e}"),
    }

    Ok(())
}
