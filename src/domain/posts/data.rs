use time::macros::date;

use super::Post;
use crate::domain::slug::Slug;

fn tags(values: &[&str]) -> Vec<String> {
    values.iter().map(|value| value.to_string()).collect()
}

fn slug(value: &str) -> Slug {
    Slug::new(value).expect("built-in slugs are normalized")
}

pub fn sample_posts() -> Vec<Post> {
    vec![
        Post {
            title: "Building Scalable APIs with Node.js".to_string(),
            slug: slug("building-scalable-apis-with-nodejs"),
            date: date!(2026 - 01 - 03),
            tags: tags(&["Node.js", "Backend"]),
            description: "Patterns I rely on to keep Node.js services fast and predictable as traffic grows: clustering, connection pooling, and backpressure-aware streams.".to_string(),
            content: r#"<p>Node.js makes it easy to ship an API in an afternoon. Keeping that API healthy at ten times the traffic takes a little more discipline.</p>
<h2>Use every core</h2>
<p>A single Node.js process runs JavaScript on one thread. Run one worker per core behind the cluster module or a process manager so a busy request never stalls the rest.</p>
<pre><code class="language-js">import cluster from 'node:cluster';
import { availableParallelism } from 'node:os';

if (cluster.isPrimary) {
  for (let i = 0; i &lt; availableParallelism(); i++) cluster.fork();
} else {
  await import('./server.js');
}</code></pre>
<h2>Pool your connections</h2>
<p>Opening a database connection per request is the fastest way to exhaust the server. Share a bounded pool and size it against what the database can actually serve.</p>
<h2>Respect backpressure</h2>
<p>When streaming large responses, check the return value of <code>write()</code> and wait for <code>drain</code>. Ignoring it buffers the whole payload in memory.</p>
<ul>
  <li>Measure p95 latency, not averages.</li>
  <li>Put timeouts on every outbound call.</li>
  <li>Fail fast and let the load balancer retry elsewhere.</li>
</ul>"#
                .to_string(),
        },
        Post {
            title: "Understanding WebRTC: Real-Time Communication on the Web".to_string(),
            slug: slug("understanding-webrtc"),
            date: date!(2025 - 12 - 28),
            tags: tags(&["WebRTC"]),
            description: "A practical tour of WebRTC: signaling, ICE candidates, STUN and TURN, and how two browsers end up talking directly to each other.".to_string(),
            content: r#"<p>WebRTC lets two browsers exchange audio, video, and arbitrary data without a media server in the middle. The API is small; the networking underneath is not.</p>
<h2>Signaling</h2>
<p>WebRTC deliberately leaves signaling to you. Peers exchange an SDP offer and answer over any channel you like, usually a WebSocket, before any media flows.</p>
<h2>ICE, STUN and TURN</h2>
<p>Each peer gathers ICE candidates: local addresses, public addresses discovered through a STUN server, and relay addresses from a TURN server. The connection uses the best pair that actually works.</p>
<pre><code class="language-js">const pc = new RTCPeerConnection({
  iceServers: [{ urls: 'stun:stun.l.google.com:19302' }],
});
pc.onicecandidate = ({ candidate }) =&gt; candidate &amp;&amp; signal.send({ candidate });</code></pre>
<h2>Data channels</h2>
<p>Beyond media, <code>RTCDataChannel</code> gives you a low-latency, optionally unordered pipe that is ideal for games and collaborative tools.</p>"#
                .to_string(),
        },
        Post {
            title: "PostgreSQL Performance Tuning Essentials".to_string(),
            slug: slug("postgresql-performance-tuning"),
            date: date!(2025 - 12 - 15),
            tags: tags(&["PostgreSQL", "Database"]),
            description: "Indexes, EXPLAIN ANALYZE, and a handful of configuration settings that fix most slow PostgreSQL queries I have met in production.".to_string(),
            content: r#"<p>Most slow PostgreSQL queries are not exotic. They are missing an index, reading far more rows than they return, or fighting a default setting sized for a laptop.</p>
<h2>Read the plan</h2>
<p>Start every investigation with <code>EXPLAIN (ANALYZE, BUFFERS)</code>. Compare estimated and actual row counts; large gaps usually mean stale statistics.</p>
<pre><code class="language-sql">EXPLAIN (ANALYZE, BUFFERS)
SELECT * FROM orders WHERE customer_id = 42 ORDER BY created_at DESC LIMIT 20;</code></pre>
<h2>Index for the query you run</h2>
<p>A composite index on <code>(customer_id, created_at DESC)</code> serves the query above without a sort step. Partial indexes keep hot subsets small.</p>
<h2>Settings worth checking</h2>
<ul>
  <li><code>shared_buffers</code> around a quarter of system memory.</li>
  <li><code>work_mem</code> large enough to keep sorts out of temporary files.</li>
  <li><code>random_page_cost</code> lowered on SSD storage.</li>
</ul>"#
                .to_string(),
        },
    ]
}
