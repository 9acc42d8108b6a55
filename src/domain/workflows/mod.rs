pub mod stock_adjustment;
