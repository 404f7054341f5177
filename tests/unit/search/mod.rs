mod pool;
mod sink;
