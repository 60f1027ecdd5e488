use crmcib_engine::{CibClient, DocumentAccessor, PollConfig, ScriptedRunner};
use std::time::Duration;

#[allow(dead_code)]
pub const CLUSTER_CIB: &str = r#"<cib epoch="7" num_updates="0" admin_epoch="0">
  <configuration>
    <crm_config>
      <cluster_property_set id="cib-bootstrap-options">
        <nvpair id="cib-bootstrap-options-cluster-name" name="cluster-name" value="linstor"/>
      </cluster_property_set>
    </crm_config>
    <nodes>
      <node id="1" uname="li0"/>
      <node id="2" uname="li1"/>
    </nodes>
    <resources>
      <primitive id="p_nfs" class="ocf" provider="heartbeat" type="nfsserver"/>
      <primitive id="p_fs" class="ocf" provider="heartbeat" type="Filesystem"/>
    </resources>
    <constraints>
      <rsc_order id="o_fs_nfs" score="INFINITY" first="p_fs" then="p_nfs"/>
      <rsc_colocation id="co_nfs_fs" score="INFINITY" rsc="p_nfs" with-rsc="p_fs"/>
    </constraints>
  </configuration>
  <status>
    <node_state id="1" uname="li0" in_ccm="true" crmd="online" join="member" expected="member">
      <lrm id="1"><lrm_resources>
        <lrm_resource id="p_nfs"><lrm_rsc_op id="p_nfs_last_0" operation="start" rc-code="0"/></lrm_resource>
        <lrm_resource id="p_fs"><lrm_rsc_op id="p_fs_last_0" operation="start" rc-code="0"/></lrm_resource>
      </lrm_resources></lrm>
    </node_state>
  </status>
</cib>"#;

/// The same cluster after both resources were stopped on li0
#[allow(dead_code)]
pub fn stopped_cib() -> String {
    CLUSTER_CIB.replace(r#"operation="start" rc-code="0""#, r#"operation="stop" rc-code="0""#)
}

/// Scripted stand-ins for the three CRM commands, with handles kept for
/// assertions after the client has taken ownership of its runners
#[allow(dead_code)]
pub struct FakeCluster {
    pub query: ScriptedRunner,
    pub replace: ScriptedRunner,
    pub create: ScriptedRunner,
}

#[allow(dead_code)]
impl FakeCluster {
    /// Every query answers with `cib`
    pub fn serving(cib: &str) -> Self {
        Self::with_query(ScriptedRunner::always(cib))
    }

    pub fn with_query(query: ScriptedRunner) -> Self {
        Self {
            query,
            replace: ScriptedRunner::new(),
            create: ScriptedRunner::new(),
        }
    }

    pub fn accessor(&self) -> DocumentAccessor {
        DocumentAccessor::new(
            Box::new(self.query.clone()),
            Box::new(self.replace.clone()),
            Box::new(self.create.clone()),
        )
    }

    pub fn client(&self, max_retries: u32) -> CibClient {
        CibClient::new(self.accessor(), fast_poll(max_retries))
    }

    /// The single document committed so far
    pub fn committed(&self) -> crmcib_core::Document {
        let payloads = self.replace.payloads();
        assert_eq!(payloads.len(), 1, "expected exactly one commit");
        crmcib_core::Document::parse(&payloads[0]).unwrap()
    }
}

#[allow(dead_code)]
pub fn fast_poll(max_retries: u32) -> PollConfig {
    PollConfig {
        max_retries,
        retry_delay: Duration::ZERO,
    }
}
