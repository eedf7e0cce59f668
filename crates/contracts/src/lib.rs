//! Контракты (DTO) между frontend и backend: агрегаты домена и usecases.

pub mod domain;
pub mod usecases;
