use criterion::{criterion_group, criterion_main, Criterion};
use std::sync::Arc;

use service::auth::domain::{Credentials, NewUsuario};
use service::auth::repository::mock::MockUsuarioRepository;
use service::auth::service::{CredentialConfig, CredentialService};

fn bench_authenticate(c: &mut Criterion) {
    let repo = Arc::new(MockUsuarioRepository::default());
    let svc = CredentialService::new(repo, CredentialConfig { jwt_secret: Some("secret".into()), token_ttl_hours: 12 });

    // user is registered outside the measured loop
    let rt = tokio::runtime::Runtime::new().unwrap();
    let _ = rt.block_on(svc.register(NewUsuario { email: "bench@example.com".into(), senha: "Benchmark1".into() }));

    c.bench_function("credential_authenticate", |b| {
        b.iter(|| {
            let _ = rt
                .block_on(svc.authenticate(Credentials { email: "bench@example.com".into(), senha: "Benchmark1".into() }))
                .unwrap();
        });
    });
}

criterion_group!(benches, bench_authenticate);
criterion_main!(benches);
