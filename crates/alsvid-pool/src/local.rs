//! In-process reference transport.
//!
//! Connects the members of a single-host pool over zero-capacity channels,
//! giving the same rendezvous semantics as an MPI-style transport: every
//! send blocks until the matching receive runs. Used by the integration
//! tests and by single-host thread pools; multi-host pools plug their own
//! [`Transport`] implementation in instead.

use std::sync::mpsc::{Receiver, SyncSender, sync_channel};
use std::sync::{Mutex, PoisonError};

use crate::error::TransportError;
use crate::transport::Transport;

/// Builder for a fully connected set of [`LocalTransport`] endpoints.
pub struct LocalPool;

impl LocalPool {
    /// Create `size` connected endpoints, one per rank, in rank order.
    ///
    /// Each endpoint is meant to move to its own thread. Dropping an
    /// endpoint disconnects it: peers blocked on a transfer with it fail
    /// with [`TransportError::Disconnected`] instead of deadlocking.
    pub fn endpoints(size: usize) -> Vec<LocalTransport> {
        let mut senders: Vec<Vec<Option<SyncSender<Vec<u64>>>>> =
            (0..size).map(|_| (0..size).map(|_| None).collect()).collect();
        let mut receivers: Vec<Vec<Option<Mutex<Receiver<Vec<u64>>>>>> =
            (0..size).map(|_| (0..size).map(|_| None).collect()).collect();

        for src in 0..size {
            for dst in 0..size {
                if src == dst {
                    continue;
                }
                // Capacity 0 gives true rendezvous: send parks until recv.
                let (tx, rx) = sync_channel(0);
                senders[src][dst] = Some(tx);
                receivers[dst][src] = Some(Mutex::new(rx));
            }
        }

        senders
            .into_iter()
            .zip(receivers)
            .enumerate()
            .map(|(rank, (to_peers, from_peers))| LocalTransport {
                rank,
                size,
                to_peers,
                from_peers,
            })
            .collect()
    }
}

/// One rank's endpoint of an in-process pool.
pub struct LocalTransport {
    rank: usize,
    size: usize,
    /// Sender toward each peer, indexed by destination rank.
    to_peers: Vec<Option<SyncSender<Vec<u64>>>>,
    /// Receiver from each peer, indexed by source rank.
    from_peers: Vec<Option<Mutex<Receiver<Vec<u64>>>>>,
}

impl Transport for LocalTransport {
    fn rank(&self) -> usize {
        self.rank
    }

    fn size(&self) -> usize {
        self.size
    }

    fn send(&self, dest: usize, buffer: &[u64]) -> Result<(), TransportError> {
        let sender = self
            .to_peers
            .get(dest)
            .and_then(|s| s.as_ref())
            .ok_or(TransportError::InvalidRank {
                rank: dest,
                size: self.size,
            })?;
        sender
            .send(buffer.to_vec())
            .map_err(|_| TransportError::Disconnected { rank: dest })
    }

    fn recv(&self, source: usize) -> Result<Vec<u64>, TransportError> {
        let receiver = self
            .from_peers
            .get(source)
            .and_then(|r| r.as_ref())
            .ok_or(TransportError::InvalidRank {
                rank: source,
                size: self.size,
            })?;
        receiver
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .recv()
            .map_err(|_| TransportError::Disconnected { rank: source })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn buffers_arrive_intact() {
        let mut endpoints = LocalPool::endpoints(2);
        let b = endpoints.pop().unwrap();
        let a = endpoints.pop().unwrap();

        let handle = thread::spawn(move || b.send(0, &[7, 8, 9]));
        assert_eq!(a.recv(1).unwrap(), vec![7, 8, 9]);
        handle.join().unwrap().unwrap();
    }

    #[test]
    fn empty_buffers_are_valid_transfers() {
        let mut endpoints = LocalPool::endpoints(2);
        let b = endpoints.pop().unwrap();
        let a = endpoints.pop().unwrap();

        let handle = thread::spawn(move || b.send(0, &[]));
        assert_eq!(a.recv(1).unwrap(), Vec::<u64>::new());
        handle.join().unwrap().unwrap();
    }

    #[test]
    fn self_and_out_of_range_ranks_are_rejected() {
        let endpoints = LocalPool::endpoints(2);
        assert!(matches!(
            endpoints[0].send(0, &[1]),
            Err(TransportError::InvalidRank { rank: 0, size: 2 })
        ));
        assert!(matches!(
            endpoints[0].recv(5),
            Err(TransportError::InvalidRank { rank: 5, size: 2 })
        ));
    }

    #[test]
    fn dropped_peer_unblocks_sender() {
        let mut endpoints = LocalPool::endpoints(2);
        let b = endpoints.pop().unwrap();
        drop(endpoints.pop()); // rank 0 vanishes

        assert!(matches!(
            b.send(0, &[1, 2]),
            Err(TransportError::Disconnected { rank: 0 })
        ));
    }

    #[test]
    fn dropped_peer_unblocks_receiver() {
        let mut endpoints = LocalPool::endpoints(2);
        let b = endpoints.pop().unwrap();
        drop(endpoints.pop());

        assert!(matches!(
            b.recv(0),
            Err(TransportError::Disconnected { rank: 0 })
        ));
    }

    #[test]
    fn messages_from_distinct_sources_do_not_mix() {
        let mut endpoints = LocalPool::endpoints(3);
        let c = endpoints.pop().unwrap();
        let b = endpoints.pop().unwrap();
        let a = endpoints.pop().unwrap();

        let hb = thread::spawn(move || b.send(0, &[1]));
        let hc = thread::spawn(move || c.send(0, &[2]));
        // Receive in the opposite order the sends were spawned.
        assert_eq!(a.recv(2).unwrap(), vec![2]);
        assert_eq!(a.recv(1).unwrap(), vec![1]);
        hb.join().unwrap().unwrap();
        hc.join().unwrap().unwrap();
    }
}
