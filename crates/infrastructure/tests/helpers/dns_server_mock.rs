use hickory_proto::op::{Message, MessageType, ResponseCode};
use hickory_proto::rr::rdata::{A, AAAA};
use hickory_proto::rr::{RData, Record};
use std::net::{IpAddr, SocketAddr};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};
use tokio::sync::oneshot;

/// How the mock upstream answers each query.
#[derive(Debug, Clone)]
pub enum MockBehavior {
    /// NOERROR with one A/AAAA record per address
    Answer { addresses: Vec<IpAddr>, ttl: u32 },
    /// Empty answer with the given rcode
    Rcode(ResponseCode),
    /// Correct answer, but with a different message id
    WrongId,
    /// Never reply
    Silent,
}

impl MockBehavior {
    pub fn answer(addresses: &[&str]) -> Self {
        MockBehavior::Answer {
            addresses: addresses.iter().map(|a| a.parse().unwrap()).collect(),
            ttl: 300,
        }
    }
}

/// Mock DNS upstream on 127.0.0.1 with an ephemeral port.
pub struct MockDnsServer {
    addr: SocketAddr,
    queries: Arc<AtomicUsize>,
    shutdown_tx: Option<oneshot::Sender<()>>,
}

impl MockDnsServer {
    pub async fn start_udp(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let counter = Arc::clone(&queries);
        tokio::spawn(async move {
            let mut buf = vec![0u8; 4096];

            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    result = socket.recv_from(&mut buf) => {
                        if let Ok((len, peer)) = result {
                            counter.fetch_add(1, Ordering::SeqCst);
                            if let Some(response) = Self::build_response(&buf[..len], &behavior) {
                                let _ = socket.send_to(&response, peer).await;
                            }
                        }
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub async fn start_tcp(behavior: MockBehavior) -> Result<Self, std::io::Error> {
        let listener = TcpListener::bind("127.0.0.1:0").await?;
        let addr = listener.local_addr()?;
        let queries = Arc::new(AtomicUsize::new(0));
        let (shutdown_tx, mut shutdown_rx) = oneshot::channel();

        let counter = Arc::clone(&queries);
        tokio::spawn(async move {
            loop {
                tokio::select! {
                    _ = &mut shutdown_rx => break,
                    accepted = listener.accept() => {
                        let Ok((mut stream, _)) = accepted else { continue };
                        let counter = Arc::clone(&counter);
                        let behavior = behavior.clone();
                        tokio::spawn(async move {
                            let Ok(len) = stream.read_u16().await else { return };
                            let mut query = vec![0u8; len as usize];
                            if stream.read_exact(&mut query).await.is_err() {
                                return;
                            }
                            counter.fetch_add(1, Ordering::SeqCst);
                            match Self::build_response(&query, &behavior) {
                                Some(response) => {
                                    let _ = stream.write_u16(response.len() as u16).await;
                                    let _ = stream.write_all(&response).await;
                                }
                                None => {
                                    // Hold the connection open until the client gives up.
                                    let mut sink = [0u8; 1];
                                    let _ = stream.read(&mut sink).await;
                                }
                            }
                        });
                    }
                }
            }
        });

        Ok(Self {
            addr,
            queries,
            shutdown_tx: Some(shutdown_tx),
        })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Number of queries received so far.
    pub fn queries(&self) -> usize {
        self.queries.load(Ordering::SeqCst)
    }

    pub fn build_response(query: &[u8], behavior: &MockBehavior) -> Option<Vec<u8>> {
        let request = Message::from_vec(query).ok()?;

        let mut response = Message::new();
        response
            .set_id(request.id())
            .set_message_type(MessageType::Response)
            .set_op_code(request.op_code())
            .set_recursion_desired(request.recursion_desired())
            .set_recursion_available(true);
        response.add_queries(request.queries().to_vec());

        let name = request.queries().first()?.name().clone();

        match behavior {
            MockBehavior::Silent => return None,
            MockBehavior::Rcode(code) => {
                response.set_response_code(*code);
            }
            MockBehavior::WrongId => {
                response.set_id(request.id().wrapping_add(1));
            }
            MockBehavior::Answer { addresses, ttl } => {
                let records: Vec<Record> = addresses
                    .iter()
                    .map(|ip| {
                        let rdata = match ip {
                            IpAddr::V4(v4) => RData::A(A(*v4)),
                            IpAddr::V6(v6) => RData::AAAA(AAAA(*v6)),
                        };
                        Record::from_rdata(name.clone(), *ttl, rdata)
                    })
                    .collect();
                response.add_answers(records);
            }
        }

        response.to_vec().ok()
    }

    pub fn shutdown(mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}

impl Drop for MockDnsServer {
    fn drop(&mut self) {
        if let Some(tx) = self.shutdown_tx.take() {
            let _ = tx.send(());
        }
    }
}
