mod publish;

pub use publish::run_publish;
