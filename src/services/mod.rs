//! Servicios de la aplicación
//!
//! El núcleo de cómputo (atrasos, horarios programados, reportes) son
//! funciones puras sobre los modelos; la generación de datos de
//! demostración es el único servicio con I/O.

pub mod delay_service;
pub mod report_service;
pub mod sample_data_service;
pub mod schedule_service;
