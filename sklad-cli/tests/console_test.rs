use sklad_catalog::{PricingConfig, ZeroStockPolicy};
use sklad_cli::{Session, MENU};
use sklad_core::Warehouse;

fn run_script(script: &str, warehouse: Warehouse) -> (Warehouse, String) {
    let mut session = Session::new(script.as_bytes(), Vec::new(), warehouse);
    session.run().unwrap();
    let (warehouse, out) = session.into_parts();
    (warehouse, String::from_utf8(out).unwrap())
}

fn run(script: &str) -> (Warehouse, String) {
    run_script(script, Warehouse::new("Main Warehouse"))
}

const ADD_PEN: &str = "1 Pen 2.0 100\n";
const ADD_ANA: &str = "2 Ana Petrova 0888123456 ana@example.com Acme Sofia\n";

#[test]
fn test_add_goods_then_exit() {
    let (warehouse, out) = run(&format!("{}5\n", ADD_PEN));

    assert!(out.starts_with(MENU));
    assert!(out.contains("Enter product name: Enter unit price: Enter quantity: Goods added successfully!\n"));
    assert!(out.ends_with("Exiting program.\n"));

    let pen = warehouse.search_goods("Pen").unwrap();
    assert_eq!(pen.amount(), 200.0);
    assert_eq!(pen.quantity(), 100);
}

#[test]
fn test_request_and_print_information() {
    let script = format!("{}{}3 Ana Pen 10\n4\n5\n", ADD_PEN, ADD_ANA);
    let (warehouse, out) = run(&script);

    assert!(out.contains("Customer added successfully!\n"));
    assert!(out.contains("Request successfully processed!\n"));

    let expected_report = "Name: Ana Petrova, Phone: 0888123456, Email: ana@example.com\n\
                           Company: Acme, Delivery Address: Sofia, Total Payment: 20\n\
                           Goods requested: \n\
                           Product: Pen, Unit Price: 2, Quantity: 10, Amount: 20\n";
    assert!(out.contains(expected_report));
    assert_eq!(warehouse.calculate_turnover(), 20.0);
}

#[test]
fn test_request_for_unknown_product() {
    let script = format!("{}{}3 Ana Ink 10\n5\n", ADD_PEN, ADD_ANA);
    let (warehouse, out) = run(&script);

    assert!(out.contains("Product not found!\n"));
    assert_eq!(warehouse.customers()[0].total_payment(), 0.0);
}

#[test]
fn test_request_for_unknown_customer() {
    let script = format!("{}{}3 Boris Pen 10\n5\n", ADD_PEN, ADD_ANA);
    let (warehouse, out) = run(&script);

    assert!(out.contains("Customer not found!\n"));
    assert_eq!(warehouse.catalog().len(), 1);
    assert_eq!(warehouse.search_goods("Pen").unwrap().quantity(), 100);
}

#[test]
fn test_invalid_choices_loop_back() {
    let (_, out) = run("7\nabc\n0\n5\n");

    assert_eq!(out.matches("Invalid choice! Try again.\n").count(), 3);
    assert_eq!(out.matches(MENU).count(), 4);
    assert!(out.ends_with("Exiting program.\n"));
}

#[test]
fn test_malformed_number_is_reprompted() {
    let (warehouse, out) = run("1 Pen two 2.0 lots 100\n5\n");

    assert_eq!(out.matches("Invalid number! Try again.\n").count(), 2);
    assert!(out.contains("Enter unit price: Invalid number! Try again.\nEnter unit price: "));
    assert!(out.contains("Goods added successfully!\n"));

    let pen = warehouse.search_goods("Pen").unwrap();
    assert_eq!(pen.unit_price(), 2.0);
    assert_eq!(pen.quantity(), 100);
}

#[test]
fn test_end_of_input_closes_session() {
    let mut session = Session::new("1 Pen 2.0".as_bytes(), Vec::new(), Warehouse::new("Main Warehouse"));
    session.run().unwrap();
    assert!(session.warehouse().catalog().is_empty());

    let (warehouse, out) = run("1 Pen 2.0");

    assert!(!out.contains("Goods added successfully!"));
    assert!(!out.contains("Exiting program."));
    assert!(warehouse.catalog().is_empty());
}

#[test]
fn test_zero_stock_entry() {
    let script = format!("1 Ink 3.0 0\n{}3 Ana Ink 2\n5\n", ADD_ANA);

    let (warehouse, out) = run(&script);
    assert!(out.contains("Product has no stock to price!\n"));
    assert!(warehouse.customers()[0].ordered_goods().is_empty());

    let propagate = Warehouse::with_pricing(
        "Main Warehouse",
        PricingConfig {
            zero_stock_policy: ZeroStockPolicy::Propagate,
        },
    );
    let (warehouse, out) = run_script(&script, propagate);
    assert!(out.contains("Request successfully processed!\n"));
    assert!(warehouse.customers()[0].total_payment().is_nan());
}

#[test]
fn test_repeated_requests_are_separate_line_items() {
    let script = format!("{}{}3 Ana Pen 10\n1 Pen 3.0 50\n3 Ana Pen 1\n5\n", ADD_PEN, ADD_ANA);
    let (warehouse, _) = run(&script);

    let ana = &warehouse.customers()[0];
    assert_eq!(ana.ordered_goods().len(), 2);
    assert_eq!(ana.ordered_goods()[0].amount(), 20.0);
    // Second request is priced at the catalog's current price
    assert_eq!(ana.ordered_goods()[1].amount(), 3.0);
    assert_eq!(ana.total_payment(), 23.0);
}

#[test]
fn test_print_information_uses_six_significant_digits() {
    let script = format!("1 Clip 0.1 100\n1 Big 1e20 1\n{}3 Ana Clip 3\n3 Ana Big 1\n4\n5\n", ADD_ANA);
    let (warehouse, out) = run(&script);

    assert!(out.contains("Product: Clip, Unit Price: 0.1, Quantity: 3, Amount: 0.3\n"));
    assert!(out.contains("Product: Big, Unit Price: 1e+20, Quantity: 1, Amount: 1e+20\n"));
    assert!(out.contains("Total Payment: 1e+20\n"));
    assert!(!out.contains("0.30000000000000004"));
    assert_eq!(warehouse.customers()[0].ordered_goods().len(), 2);
}

#[test]
fn test_add_customer_prompts_each_field() {
    let (warehouse, out) = run(ADD_ANA);

    assert!(out.contains(
        "Enter customer name: Enter customer surname: Enter phone: Enter email: \
         Enter company name: Enter delivery address: Customer added successfully!\n"
    ));

    let ana = &warehouse.customers()[0];
    assert_eq!(ana.name(), "Ana");
    assert_eq!(ana.identity().surname(), "Petrova");
    assert_eq!(ana.identity().email(), "ana@example.com");
    assert_eq!(ana.company_name(), "Acme");
    assert_eq!(ana.delivery_address(), "Sofia");
}
