use super::server::Server;
use super::supplier::Supplier;
use super::types::ServerId;

/// Ordered collection of every service point at one instant.
///
/// Index `i` holds the server with id `i + 1`: human servers first, then
/// self-checkout counters. Updates consume the roster and hand back its
/// successor, so no holder can observe a stale roster.
#[derive(Debug, Clone, Default)]
pub struct Roster {
    servers: Vec<Server>,
}

impl Roster {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds `servers` idle human servers followed by `self_checkouts` idle
    /// counters, all with empty queues of capacity `max_queue`.
    pub fn build(servers: usize, self_checkouts: usize, max_queue: usize, rest_time: Supplier) -> Self {
        let humans = (1..=servers).map(|id| Server::human(id, max_queue, rest_time.clone()));
        let counters = (servers + 1..=servers + self_checkouts)
            .map(|id| Server::self_checkout(id, max_queue));

        humans.chain(counters).fold(Self::new(), Self::push)
    }

    pub fn get(&self, id: ServerId) -> Option<&Server> {
        id.checked_sub(1).and_then(|index| self.servers.get(index))
    }

    /// Server with the given id.
    ///
    /// # Panics
    /// If `id` is not part of this roster.
    pub fn server(&self, id: ServerId) -> &Server {
        &self.servers[id - 1]
    }

    /// Replaces the entry whose id matches `server`.
    ///
    /// # Panics
    /// If the server's id is not part of this roster.
    pub fn set(mut self, server: Server) -> Self {
        let index = server.id() - 1;
        self.servers[index] = server;
        self
    }

    /// Appends a server. Its id must be the next contiguous id.
    pub fn push(mut self, server: Server) -> Self {
        assert_eq!(
            server.id(),
            self.servers.len() + 1,
            "server ids must be contiguous"
        );
        self.servers.push(server);
        self
    }

    /// Applies `f` to every entry, keeping order.
    pub fn map<F>(self, f: F) -> Self
    where
        F: FnMut(Server) -> Server,
    {
        Self {
            servers: self.servers.into_iter().map(f).collect(),
        }
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Server> {
        self.servers.iter()
    }

    pub fn self_checkouts(&self) -> impl Iterator<Item = &Server> {
        self.servers.iter().filter(|s| s.is_self_checkout())
    }

    pub fn len(&self) -> usize {
        self.servers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.servers.is_empty()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a Server;
    type IntoIter = std::slice::Iter<'a, Server>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
