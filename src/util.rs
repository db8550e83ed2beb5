/// Evaluate an expression, and log how long it took at `debug` level.
#[macro_export]
macro_rules! profile(
  ($title: expr, $expr: expr) => {{
    let t0 = std::time::Instant::now();
    let ret = $expr;
    ::log::debug!("{} profile: {}ms", $title, t0.elapsed().as_millis());
    ret
  }}
);
