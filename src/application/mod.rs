// Application layer: gRPC service, wire mapping and result presentation

pub mod grpc_service;
pub mod mappers;
pub mod report;

pub use grpc_service::GrpcMassBalanceService;
pub use report::{BalanceReport, INPUT_ERROR_MESSAGE};
