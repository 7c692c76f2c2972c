pub mod fragment;
pub mod generator;

pub use fragment::FragmentBuilder;
pub use generator::Generator;
