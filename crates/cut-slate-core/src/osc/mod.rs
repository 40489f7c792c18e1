mod dialect;
mod encoder;
mod transport;
mod value;

pub use {
    dialect::WireDialect,
    encoder::encode,
    transport::{Endpoint, Transport, UdpTransport},
    value::OscValue,
};

#[cfg(test)]
pub(crate) use transport::prefer_ipv4;

pub(crate) const DEFAULT_HOST: &str = "127.0.0.1";
pub(crate) const DEFAULT_PORT: u16 = 3333;
