//! A set of utility structs and functions used by the models.
