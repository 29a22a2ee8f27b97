
use recipe_test_utils::prelude::*;
use rust_decimal::Decimal;
