#[cfg(feature = "lambda")]
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
#[cfg(feature = "lambda")]
use product_lookup::utils::logger;
#[cfg(feature = "lambda")]
use product_lookup::{DependencyResolver, Function, PgProductRepository, Product};

#[cfg(feature = "lambda")]
async fn function_handler(
    function: &Function<PgProductRepository>,
    event: LambdaEvent<String>,
) -> Result<Option<Product>, Error> {
    let (input, context) = event.into_parts();
    tracing::info!(request_id = %context.request_id, "looking up product");

    let product = function.handle(&input).await?;
    Ok(product)
}

#[cfg(feature = "lambda")]
#[tokio::main]
async fn main() -> Result<(), Error> {
    logger::init_lambda_logger();

    // Wire the object graph once per process; startup fails before serving
    // when the base configuration file or connection string is missing.
    let function = DependencyResolver::new().resolve()?;
    let function = &function;

    run(service_fn(move |event: LambdaEvent<String>| async move {
        function_handler(function, event).await
    }))
    .await
}
