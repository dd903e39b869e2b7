fn main() {
    if let Err(err) = diabetes_risk_lib::run() {
        tracing::error!(error = %err, "Model server stopped");
        std::process::exit(1);
    }
}
