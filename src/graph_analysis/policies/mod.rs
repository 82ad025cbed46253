mod divergence_explanation;

pub use divergence_explanation::DivergenceExplanation;
