//! Basic adapter usage example
//!
//! Binds one adapter per component through a factory and logs through the
//! application interface onto the console sink.
//!
//! Run with: cargo run --example basic_usage

use application_logging_adapter::prelude::*;
use application_logging_adapter::warning;
use std::sync::Arc;

struct InventoryService {
    logger: Arc<dyn ApplicationLogger>,
}

impl InventoryService {
    fn reserve(&self, sku: &str, quantity: u32) -> Result<()> {
        self.logger.log_from(
            self,
            LogLevel::Information,
            &format!("Reserving {} x {}", quantity, sku),
        )?;
        if quantity > 10 {
            warning!(self.logger, "Large reservation for {}", sku)?;
        }
        Ok(())
    }
}

fn main() -> Result<()> {
    println!("=== Application Logging Adapter - Basic Usage Example ===\n");

    let provider = Arc::new(ConsoleLoggerProvider::new(
        ConsoleLogger::new("").with_min_severity(Severity::Debug),
    ));
    let factory = AdapterFactory::new(provider);

    let service = InventoryService {
        logger: Arc::new(factory.create_for::<InventoryService>()),
    };
    service.reserve("WIDGET-1", 3)?;
    service.reserve("WIDGET-2", 25)?;

    let adapter = factory.create("main");
    adapter.log_event(1001, LogLevel::Debug, "Startup complete")?;

    let failure = std::io::Error::new(std::io::ErrorKind::NotFound, "config.toml missing");
    adapter.log_event_error(1002, LogLevel::Error, "Falling back to defaults", &failure)?;

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
