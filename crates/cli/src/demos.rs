//! One function per example. Each returns the lines it would print.

use anyhow::Context;

use solidforge_capabilities::{Airplane, Animal, Combined, Composite, Dolphin, Flyable, Swimmable};
use solidforge_catalog::{LenientProduct, ProductBuilder, ProductDraft};
use solidforge_notifications::{
    CoupledOrderService, EmailService, InMemoryNotifier, OrderService, SkypeService,
};
use solidforge_payroll::{Employee, EmployeeRepository, run_payroll};
use solidforge_reports::{Performance, ReportKind, ReportService, generator_for};

/// Strict builder on the sample phone, plus the lenient draft for contrast.
pub fn builder(json: bool) -> anyhow::Result<Vec<String>> {
    let product = ProductBuilder::new()
        .name("iPhone 15 Pro")
        .description("The latest iPhone with A17 chip")
        .price(1399)?
        .brand("Apple")
        .category("Mobile")
        .discount(5)
        .created_at_str("2025-07-22")?
        .updated_at_str("2025-07-22")?
        .images(["front.jpg", "back.jpg"])
        .build()?;

    let mut lines = vec!["Product created successfully.".to_string()];
    if json {
        lines.push(serde_json::to_string_pretty(&product).context("serializing product")?);
    } else {
        lines.push(format!(
            "{} ({}) price {} discounted {}",
            product.name(),
            product.brand().unwrap_or("-"),
            product.price(),
            product.discounted_price()
        ));
    }

    match ProductBuilder::new().name("Free sample").price(0).and_then(ProductBuilder::build) {
        Ok(_) => lines.push("Zero-priced product was accepted".to_string()),
        Err(e) => lines.push(format!("Rejected: {e}")),
    }

    let mut draft = ProductDraft::new();
    draft.set_price(-1);
    let lenient = LenientProduct::from_draft(&draft);
    lines.push(format!("Lenient product accepted price {}", lenient.price));

    Ok(lines)
}

/// Pays every payable on the standard roster.
pub fn payroll() -> Vec<String> {
    let run = run_payroll(&EmployeeRepository::payable_employees());
    let mut lines: Vec<String> = run.payslips.iter().map(ToString::to_string).collect();
    lines.push(format!("Total: {}", run.total));
    lines
}

/// Coupled service first, then the same order through injected notifiers.
pub fn notify() -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();

    for delivery in CoupledOrderService::new().place_order() {
        lines.push(format!("[coupled] {}: {}", delivery.channel, delivery.message));
    }

    let email = OrderService::new(EmailService::new()).place_order()?;
    lines.push(format!("[injected] {}: {}", email.delivery.channel, email.delivery.message));

    let skype = OrderService::new(SkypeService::new()).place_order()?;
    lines.push(format!("[injected] {}: {}", skype.delivery.channel, skype.delivery.message));

    let memory = InMemoryNotifier::new();
    OrderService::new(&memory).place_order()?;
    lines.push(format!("[injected] memory recorded {} message(s)", memory.sent()?.len()));

    Ok(lines)
}

/// Each requested report type through both dispatchers.
///
/// Known report types are matched case-insensitively and normalized to their
/// exact key first; anything else is passed through unchanged.
pub fn reports<S: AsRef<str>>(kinds: &[S]) -> Vec<String> {
    let employee = Employee::new("John", "101");
    let performance = Performance::new();
    let service = ReportService::new();

    kinds
        .iter()
        .flat_map(|kind| {
            let raw = kind.as_ref();
            let kind = ReportKind::parse_lenient(raw).map_or(raw, |k| k.as_str());
            [
                format!("[switch] {kind}: {}", performance.generate_report(kind, &employee)),
                format!(
                    "[strategy] {kind}: {}",
                    service.generate_report(&*generator_for(kind), &employee)
                ),
            ]
        })
        .collect()
}

pub fn capabilities() -> Vec<String> {
    let composite = Composite::new();
    let airplane: &dyn Flyable = &Airplane;
    let bruno = Dolphin::new("bruno");

    let mut lines = vec![
        composite.use_a(),
        composite.use_b(),
        Combined.greet(),
        airplane.start(),
        <dyn Flyable>::maintenance_tip().to_string(),
        bruno.make_sound(),
        bruno.swim(),
    ];
    lines.extend(bruno.sleep());
    lines
}

pub fn all() -> anyhow::Result<Vec<String>> {
    let mut lines = Vec::new();

    lines.push("== builder".to_string());
    lines.extend(builder(false)?);
    lines.push("== payroll".to_string());
    lines.extend(payroll());
    lines.push("== notify".to_string());
    lines.extend(notify()?);
    lines.push("== reports".to_string());
    lines.extend(reports(&["PDF", "Word"]));
    lines.push("== capabilities".to_string());
    lines.extend(capabilities());

    Ok(lines)
}
