pub mod gradient_transition;
