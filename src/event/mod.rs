pub mod market_index;
