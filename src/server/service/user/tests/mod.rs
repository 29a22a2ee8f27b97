
use recipe_test_utils::prelude::*;
