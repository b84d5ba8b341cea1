use anyhow::{Context, Result};

use crate::graphql::PaddockSchema;

pub fn parse_variables(variables: Option<String>) -> Result<async_graphql::Variables> {
    match variables {
        Some(v) => serde_json::from_str(&v).context("Variables must be a JSON object"),
        None => Ok(async_graphql::Variables::default()),
    }
}

/// Execute `document` and print the JSON response; fails if it carries errors.
pub fn execute_and_print(
    schema: &PaddockSchema,
    document: &str,
    variables: async_graphql::Variables,
) -> Result<()> {
    let request = async_graphql::Request::new(document).variables(variables);
    let response = tokio::runtime::Runtime::new()?.block_on(schema.execute(request));

    println!("{}", serde_json::to_string_pretty(&response)?);

    if response.is_err() {
        anyhow::bail!("GraphQL request returned {} error(s)", response.errors.len());
    }
    Ok(())
}
