// server/src/services/voice_agent.rs

//! Configuration for the marketplace voice agent.
//!
//! The agent lists products by calling the `create_product` tool, which the
//! provider delivers as a webhook to `POST /api/v1/products` authenticated
//! with the service-role key and carrying the seller's `user_id`.

use marketvoice::DEFAULT_QUANTITY_UNIT;
use serde_json::{json, Value};

pub const CREATE_PRODUCT_TOOL: &str = "create_product";

/// Units the agent is allowed to offer. The API itself accepts any unit.
pub const QUANTITY_UNITS: [&str; 14] = [
  "item", "kg", "g", "lb", "oz", "liter", "ml", "gallon", "dozen", "pack", "box", "bag", "bundle", "unit",
];

const AGENT_PROMPT: &str = r#"You are a helpful marketplace assistant for an AI-powered voice marketplace.

Your role is to help users:
1. List products for sale by collecting: product name, price, and quantity unit (like "per item", "per kg", "per liter", etc.)
2. Browse and search for products
3. Answer questions about the marketplace

When a user wants to sell something:
- Ask for the product name if not provided
- Ask for the price if not provided
- Ask for the quantity unit if not clear (default to "item" if they just say a price)
- Once you have all information, use the create_product tool to list it

Be conversational, friendly, and concise. Confirm actions after completing them."#;

const FIRST_MESSAGE: &str = "Hi! I'm your marketplace assistant. You can ask me to list products for sale, browse items, or answer questions. What would you like to do?";

/// Agent prompt plus the JSON schema of every tool the agent may call.
pub fn agent_config() -> Value {
  json!({
    "agent": {
      "prompt": { "prompt": AGENT_PROMPT },
      "first_message": FIRST_MESSAGE,
      "language": "en",
    },
    "tools": [create_product_tool()],
  })
}

fn create_product_tool() -> Value {
  json!({
    "type": "custom",
    "name": CREATE_PRODUCT_TOOL,
    "description": "Creates a new product listing in the marketplace when a user wants to sell something. \
                    Use this when you have collected the product name, price, and quantity unit from the user.",
    "parameters": {
      "type": "object",
      "properties": {
        "name": {
          "type": "string",
          "description": "The name of the product being sold (e.g., \"Fresh Eggs\", \"Organic Milk\", \"Handmade Soap\")",
        },
        "price": {
          "type": "number",
          "description": "The price of the product as a positive number (e.g., 2.50, 10, 0.99)",
        },
        "quantity_unit": {
          "type": "string",
          "enum": QUANTITY_UNITS,
          "description": "The unit for the price (e.g., \"item\" for individual items, \"kg\" for kilograms, \"dozen\" for 12 items)",
          "default": DEFAULT_QUANTITY_UNIT,
        },
        "description": {
          "type": "string",
          "description": "Optional description of the product",
        },
      },
      "required": ["name", "price"],
    },
  })
}
