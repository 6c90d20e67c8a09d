mod tcp_probe;

pub use tcp_probe::TcpConnectivityProbe;
